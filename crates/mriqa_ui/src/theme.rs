//! Theme constants and shared widget styles.

use iced::widget::container;
use iced::{Border, Color, Theme};

/// Application colors (dark theme).
pub mod colors {
    use super::Color;

    /// Card/panel background
    pub const CARD: Color = Color::from_rgb(0.14, 0.14, 0.14);

    /// Table header background
    pub const TABLE_HEADER: Color = Color::from_rgb(0.24, 0.35, 0.50);

    /// Border color
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.25);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Large font size
    pub const LG: f32 = 16.0;
}

/// Style for section cards.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::CARD.into()),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}

/// Style for the metrics table header row.
pub fn table_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::TABLE_HEADER.into()),
        ..container::Style::default()
    }
}
