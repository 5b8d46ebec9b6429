// SPDX-License-Identifier: MPL-2.0
//! Sign-in value objects and form validation.

use std::fmt;

/// Message shown when the e-mail field is empty.
pub const EMAIL_REQUIRED: &str = "E-mail obrigatório";
/// Message shown when the e-mail field is not an address.
pub const EMAIL_INVALID: &str = "Digite um e-mail válido";
/// Message shown when the password field is empty.
pub const PASSWORD_REQUIRED: &str = "Senha obrigatória";

/// A syntactically valid e-mail address.
///
/// Only the shape `local@domain.tld` without whitespace is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parses an address, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, &'static str> {
        let candidate = raw.trim();
        if candidate.is_empty() {
            return Err(EMAIL_REQUIRED);
        }
        if candidate.chars().any(char::is_whitespace) {
            return Err(EMAIL_INVALID);
        }

        let Some((local, domain)) = candidate.split_once('@') else {
            return Err(EMAIL_INVALID);
        };
        if local.is_empty() || domain.contains('@') {
            return Err(EMAIL_INVALID);
        }

        let Some((host, tld)) = domain.rsplit_once('.') else {
            return Err(EMAIL_INVALID);
        };
        if host.is_empty() || tld.len() < 2 {
            return Err(EMAIL_INVALID);
        }

        Ok(Self(candidate.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated sign-in input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validates the raw sign-in form.
///
/// Every field is checked so the form can flag all problems at once.
pub fn validate_sign_in(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let email = Email::parse(email);
    let password_error = password.is_empty().then_some(PASSWORD_REQUIRED);

    match (email, password_error) {
        (Ok(email), None) => Ok(Credentials {
            email,
            password: password.to_string(),
        }),
        (email, password) => Err(FieldErrors {
            email: email.err(),
            password,
        }),
    }
}

/// The signed-in barber or client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl User {
    /// First word of the name, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// An authenticated session: the user plus the bearer token issued for them.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
