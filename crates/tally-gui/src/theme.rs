//! Theme for the calculator: spacing constants and widget styles.
//!
//! Style functions receive `&Theme` and draw their colors from Iced's
//! extended palette, so they follow whichever base theme is active.

use iced::widget::{button, container, text_input};
use iced::{Border, Theme};

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_XL: f32 = 32.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the application theme.
pub fn tally_theme() -> Theme {
    Theme::Light
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the compute actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => palette.primary.weak.color,
        _ => palette.primary.base.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Secondary button style - reset.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

// =============================================================================
// FIELD STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.strong.color,
        _ => palette.background.strong.color,
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: palette.background.weak.text,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Read-only result display style.
pub fn result_display(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}
