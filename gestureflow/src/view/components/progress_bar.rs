//! Horizontal bar for confidence and usage ratios.

use iced::widget::{Column, Row, container, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::view::theme;

/// Resolution of the bar, in fill portions.
const PORTIONS: f32 = 100.0;

/// A bar filled to `ratio` of its width, with optional caption texts.
pub struct ProgressBar {
    /// Filled fraction in [0, 1].
    ratio: f32,
    /// Caption on the left of the header row.
    label: Option<String>,
    /// Caption on the right of the header row.
    value: Option<String>,
    /// Height of the bar.
    height: f32,
}

impl ProgressBar {
    /// Create a new bar, clamping the ratio into [0, 1].
    pub fn new(ratio: f32) -> Self {
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            ratio,
            label: None,
            value: None,
            height: 6.0,
        }
    }

    /// Set the left caption.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the right caption.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set custom height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Filled portion and empty portion out of 100.
    fn portions(&self) -> (u16, u16) {
        let filled = (self.ratio * PORTIONS).round() as u16;
        (filled, PORTIONS as u16 - filled)
    }

    /// Render the bar as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let (filled, empty) = self.portions();
        let height = self.height;

        let mut bar = Row::new().width(Length::Fill);

        if filled > 0 {
            bar = bar.push(
                container(text(""))
                    .width(Length::FillPortion(filled))
                    .height(Length::Fixed(height))
                    .style(|t: &Theme| container::Style {
                        background: Some(iced::Background::Color(theme::colors(t).bar_fill())),
                        ..Default::default()
                    }),
            );
        }

        if empty > 0 {
            bar = bar.push(
                container(text(""))
                    .width(Length::FillPortion(empty))
                    .height(Length::Fixed(height))
                    .style(|t: &Theme| container::Style {
                        background: Some(iced::Background::Color(
                            theme::colors(t).row_background(),
                        )),
                        ..Default::default()
                    }),
            );
        }

        let bar = container(bar)
            .width(Length::Fill)
            .style(|t: &Theme| container::Style {
                border: iced::Border {
                    color: theme::colors(t).border(),
                    width: 1.0,
                    radius: 3.0.into(),
                },
                ..Default::default()
            });

        let mut content = Column::new().spacing(4).width(Length::Fill);

        if self.label.is_some() || self.value.is_some() {
            let label = container(text(self.label.unwrap_or_default()).size(13))
                .width(Length::Fill);
            let value = text(self.value.unwrap_or_default())
                .size(11)
                .style(theme::muted_text);
            content = content.push(row![label, value].align_y(Alignment::Center));
        }

        content.push(bar).into()
    }
}
