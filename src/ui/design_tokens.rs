// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All colors and measures used by the GoBarber client.

## Organization

- **Palette**: Base colors (brand orange, dark surfaces, toast tints)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use gobarber::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let hint = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::ORANGE_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand
    /// GoBarber orange: focus highlight and primary buttons.
    pub const ORANGE_500: Color = Color::from_rgb8(0xff, 0x90, 0x00);
    /// Darker orange for pressed/hovered buttons.
    pub const ORANGE_600: Color = Color::from_rgb8(0xdb, 0x7c, 0x00);

    // Dark surfaces
    pub const SURFACE_700: Color = Color::from_rgb8(0x31, 0x2e, 0x38);
    pub const SURFACE_800: Color = Color::from_rgb8(0x28, 0x26, 0x2e);
    pub const SURFACE_900: Color = Color::from_rgb8(0x23, 0x21, 0x29);

    // Text on dark surfaces
    pub const TEXT_PRIMARY: Color = Color::from_rgb8(0xf4, 0xed, 0xe8);
    pub const TEXT_MUTED: Color = Color::from_rgb8(0x66, 0x63, 0x60);
    pub const TEXT_SECONDARY: Color = Color::from_rgb8(0x99, 0x95, 0x91);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb8(0xc5, 0x30, 0x30);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb8(0x31, 0x72, 0xb7);

    // Toast backgrounds
    pub const ERROR_100: Color = Color::from_rgb8(0xfd, 0xde, 0xde);
    pub const SUCCESS_100: Color = Color::from_rgb8(0xe6, 0xff, 0xfa);
    pub const INFO_100: Color = Color::from_rgb8(0xeb, 0xf8, 0xff);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 18.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 56.0;

    // Component widths
    pub const FORM_WIDTH: f32 = 340.0;
    pub const TOAST_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: page headings
    //! - Body: primary content text
    //! - Caption: supporting text

    /// Large title - Page headings ("Faça seu logon", "Horários agendados")
    pub const TITLE_LG: f32 = 32.0;

    /// Medium title - Greeting, section headers
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - Toast descriptions, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Toast outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Input fields
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 2.0, y: 2.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn toast_backgrounds_are_lighter_than_accents() {
        let luma = |c: Color| c.r + c.g + c.b;
        assert!(luma(palette::ERROR_100) > luma(palette::ERROR_500));
        assert!(luma(palette::SUCCESS_100) > luma(palette::SUCCESS_500));
        assert!(luma(palette::INFO_100) > luma(palette::INFO_500));
    }
}
