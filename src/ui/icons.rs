// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are Feather outline glyphs embedded as SVG source. Handles are
//! created once on first access and cached in a `OnceLock`; the strokes use
//! `currentColor`, so callers pick the final color with [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `x_circle` not `dismiss_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Wraps Feather path data in a 24x24 stroked SVG document.
macro_rules! feather {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" "#,
            r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &str = feather!($body);
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Toast Icons
// =============================================================================

define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/>"#,
    "Info icon: letter i inside a circle."
);
define_icon!(
    check_circle,
    r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#,
    "Check icon: checkmark leaving a circle."
);
define_icon!(
    alert_circle,
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/>"#,
    "Alert icon: exclamation mark inside a circle."
);
define_icon!(
    x_circle,
    r#"<circle cx="12" cy="12" r="10"/><line x1="15" y1="9" x2="9" y2="15"/><line x1="9" y1="9" x2="15" y2="15"/>"#,
    "Close icon: cross inside a circle."
);

// =============================================================================
// Form Icons
// =============================================================================

define_icon!(
    mail,
    r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/>"#,
    "Mail icon: envelope."
);
define_icon!(
    lock,
    r#"<rect x="3" y="11" width="18" height="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#,
    "Lock icon: closed padlock."
);
define_icon!(
    log_in,
    r#"<path d="M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4"/><polyline points="10 17 15 12 10 7"/><line x1="15" y1="12" x2="3" y2="12"/>"#,
    "Log-in icon: arrow entering a door."
);

// =============================================================================
// Header Icons
// =============================================================================

define_icon!(
    power,
    r#"<path d="M18.36 6.64a9 9 0 1 1-12.73 0"/><line x1="12" y1="2" x2="12" y2="12"/>"#,
    "Power icon: broken circle with a vertical bar."
);

// =============================================================================
// Helpers
// =============================================================================

/// Sets a square size on an icon.
#[must_use]
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes an icon and paints it with a single color.
#[must_use]
pub fn tinted<'a>(icon: Svg<'a>, color: Color, size: f32) -> Svg<'a> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feather_wraps_body_in_svg_document() {
        let doc = feather!(r#"<circle cx="1" cy="1" r="1"/>"#);
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("stroke=\"currentColor\""));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn icons_can_be_created_repeatedly() {
        for _ in 0..2 {
            let _ = info();
            let _ = check_circle();
            let _ = alert_circle();
            let _ = x_circle();
            let _ = mail();
            let _ = lock();
            let _ = log_in();
            let _ = power();
        }
    }
}
