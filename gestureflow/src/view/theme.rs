//! Theme-aware color palette for GestureFlow.
//!
//! Use these instead of hardcoded Color::from_rgb() values in the panels.

use iced::widget::{container, text};
use iced::{Color, Theme};

/// Semantic colors derived from the theme's extended palette.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    /// Create a new ThemeColors from a theme reference.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    // ========================================================================
    // Text Colors
    // ========================================================================

    /// Primary text color.
    pub fn text(&self) -> Color {
        self.palette().background.base.text
    }

    /// Muted/secondary text color.
    pub fn text_muted(&self) -> Color {
        self.palette().background.weak.text
    }

    /// Dimmed text (inactive gestures, empty states).
    pub fn text_dimmed(&self) -> Color {
        let text = self.text();
        let bg = self.palette().background.base.color;
        Color::from_rgb(
            text.r * 0.5 + bg.r * 0.5,
            text.g * 0.5 + bg.g * 0.5,
            text.b * 0.5 + bg.b * 0.5,
        )
    }

    // ========================================================================
    // Semantic Colors
    // ========================================================================

    pub fn success(&self) -> Color {
        self.palette().success.base.color
    }

    pub fn danger(&self) -> Color {
        self.palette().danger.base.color
    }

    /// Warning color (amber). Iced has no built-in warning palette.
    pub fn warning(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.9, 0.7, 0.2)
        } else {
            Color::from_rgb(0.8, 0.6, 0.0)
        }
    }

    pub fn primary(&self) -> Color {
        self.palette().primary.base.color
    }

    /// Filled portion of confidence and usage bars.
    pub fn bar_fill(&self) -> Color {
        Color::from_rgb(0.35, 0.45, 0.95)
    }

    // ========================================================================
    // Surfaces
    // ========================================================================

    /// Default border color.
    pub fn border(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.25, 0.25, 0.3)
        } else {
            Color::from_rgb(0.8, 0.8, 0.82)
        }
    }

    /// Panel background color.
    pub fn card_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.12, 0.12, 0.14)
        } else {
            Color::from_rgb(1.0, 1.0, 1.0)
        }
    }

    /// Row/list item background.
    pub fn row_background(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.16, 0.16, 0.19)
        } else {
            Color::from_rgb(0.96, 0.96, 0.97)
        }
    }

    /// Background of the row being edited.
    pub fn row_background_selected(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.1, 0.16, 0.28)
        } else {
            Color::from_rgb(0.9, 0.94, 1.0)
        }
    }

    /// Check if the current theme is dark.
    pub fn is_dark(&self) -> bool {
        self.palette().is_dark
    }
}

/// Convenience function to create ThemeColors.
pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}

/// Bordered panel used by every dashboard section.
pub fn panel(theme: &Theme) -> container::Style {
    let c = colors(theme);
    container::Style {
        background: Some(iced::Background::Color(c.card_background())),
        border: iced::Border {
            color: c.border(),
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

/// List row inside a panel.
pub fn row_item(theme: &Theme) -> container::Style {
    let c = colors(theme);
    container::Style {
        background: Some(iced::Background::Color(c.row_background())),
        border: iced::Border {
            color: c.border(),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// List row currently selected for editing.
pub fn row_item_selected(theme: &Theme) -> container::Style {
    let c = colors(theme);
    container::Style {
        background: Some(iced::Background::Color(c.row_background_selected())),
        border: iced::Border {
            color: c.primary(),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Secondary caption text.
pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).text_muted()),
    }
}

/// De-emphasized text.
pub fn dimmed_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(colors(theme).text_dimmed()),
    }
}
