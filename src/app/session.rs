// SPDX-License-Identifier: MPL-2.0
//! Signed-in session state and its persistence.
//!
//! The session (token plus user profile) is kept in `session.toml` inside the
//! app data directory so a restart lands directly on the dashboard.
//!
//! # Path Resolution
//!
//! 1. `base_dir` passed to [`AuthState::restore`] (tests, portable installs)
//! 2. `GOBARBER_DATA_DIR` environment variable / `--data-dir`
//! 3. Platform-specific data directory

use super::paths;
use crate::domain::auth::{Session, User};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Session file name within the app data directory.
const SESSION_FILE: &str = "session.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct StoredUser {
    id: String,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct StoredSession {
    token: String,
    user: StoredUser,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        let user = &session.user;
        Self {
            token: session.token.clone(),
            user: StoredUser {
                id: user.id.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
                avatar_url: user.avatar_url.clone(),
            },
        }
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Session {
            token: stored.token,
            user: User {
                id: stored.user.id,
                name: stored.user.name,
                email: stored.user.email,
                avatar_url: stored.user.avatar_url,
            },
        }
    }
}

/// Who is signed in, mirrored to disk on every change.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    session: Option<Session>,
    base_dir: Option<PathBuf>,
}

impl AuthState {
    /// Loads the persisted session, if any.
    ///
    /// Returns the state and an optional warning. A missing file is not an
    /// error; an unreadable one yields a signed-out state and a warning.
    pub fn restore(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let mut state = Self {
            session: None,
            base_dir,
        };

        let Some(path) = state.session_file_path() else {
            return (state, None);
        };
        if !path.exists() {
            return (state, None);
        }

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                toml::from_str::<StoredSession>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(stored) => {
                let session = Session::from(stored);
                tracing::info!(user = %session.user.email, "session restored");
                state.session = Some(session);
                (state, None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "discarding unreadable session");
                (
                    state,
                    Some("Sua sessão anterior não pôde ser restaurada.".to_string()),
                )
            }
        }
    }

    /// Stores a fresh session and persists it.
    ///
    /// Returns a warning if the session could not be written; the in-memory
    /// state is updated regardless.
    pub fn sign_in(&mut self, session: Session) -> Option<String> {
        tracing::info!(user = %session.user.email, "signed in");
        self.session = Some(session);
        self.persist()
    }

    /// Forgets the session and removes the persisted file.
    pub fn sign_out(&mut self) -> Option<String> {
        if self.session.take().is_some() {
            tracing::info!("signed out");
        }

        let path = self.session_file_path()?;
        match fs::remove_file(&path) {
            Ok(()) => None,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to remove session file");
                Some("Não foi possível apagar a sessão salva.".to_string())
            }
        }
    }

    /// Replaces the profile of the signed-in user and persists it.
    ///
    /// Ignored when nobody is signed in.
    pub fn update_user(&mut self, user: User) -> Option<String> {
        let session = self.session.as_mut()?;
        session.user = user;
        self.persist()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    fn session_file_path(&self) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(self.base_dir.clone()).map(|mut path| {
            path.push(SESSION_FILE);
            path
        })
    }

    fn persist(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        let Some(path) = self.session_file_path() else {
            return Some("Não foi possível localizar a pasta de dados.".to_string());
        };

        let result = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .map_err(|e| e.to_string())
            .and_then(|()| {
                toml::to_string_pretty(&StoredSession::from(session)).map_err(|e| e.to_string())
            })
            .and_then(|content| fs::write(&path, content).map_err(|e| e.to_string()));

        match result {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to persist session");
                Some("Não foi possível salvar a sessão.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn john() -> User {
        User {
            id: "user123".to_string(),
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            avatar_url: None,
        }
    }

    fn session() -> Session {
        Session {
            user: john(),
            token: "token-123".to_string(),
        }
    }

    #[test]
    fn restore_without_file_is_signed_out() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = AuthState::restore(Some(temp_dir.path().to_path_buf()));
        assert!(!state.is_signed_in());
        assert!(warning.is_none());
    }

    #[test]
    fn sign_in_persists_token_and_user() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut state, _) = AuthState::restore(Some(temp_dir.path().to_path_buf()));

        assert!(state.sign_in(session()).is_none());

        assert_eq!(state.user().map(|u| u.email.as_str()), Some("johndoe@example.com"));
        let content = fs::read_to_string(temp_dir.path().join(SESSION_FILE)).unwrap();
        assert!(content.contains("token-123"));
        assert!(content.contains("John Doe"));
    }

    #[test]
    fn restore_reads_saved_session() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let (mut state, _) = AuthState::restore(base.clone());
        state.sign_in(session());

        let (restored, warning) = AuthState::restore(base);

        assert!(warning.is_none());
        assert_eq!(restored.session(), Some(&session()));
        assert_eq!(restored.token(), Some("token-123"));
    }

    #[test]
    fn sign_out_clears_memory_and_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut state, _) = AuthState::restore(Some(temp_dir.path().to_path_buf()));
        state.sign_in(session());

        assert!(state.sign_out().is_none());

        assert!(state.user().is_none());
        assert!(!temp_dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn sign_out_when_signed_out_is_quiet() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut state, _) = AuthState::restore(Some(temp_dir.path().to_path_buf()));
        assert!(state.sign_out().is_none());
    }

    #[test]
    fn update_user_replaces_and_persists() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let (mut state, _) = AuthState::restore(base.clone());
        state.sign_in(session());

        let updated = User {
            avatar_url: Some("imate-test.jpg".to_string()),
            ..john()
        };
        assert!(state.update_user(updated.clone()).is_none());

        assert_eq!(state.user(), Some(&updated));
        let (restored, _) = AuthState::restore(base);
        assert_eq!(restored.user(), Some(&updated));
    }

    #[test]
    fn update_user_without_session_is_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut state, _) = AuthState::restore(Some(temp_dir.path().to_path_buf()));

        assert!(state.update_user(john()).is_none());
        assert!(state.user().is_none());
        assert!(!temp_dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn corrupted_file_restores_signed_out_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(SESSION_FILE), "token = ").unwrap();

        let (state, warning) = AuthState::restore(Some(temp_dir.path().to_path_buf()));

        assert!(!state.is_signed_in());
        assert!(warning.is_some());
    }
}
