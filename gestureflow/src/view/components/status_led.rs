//! Status LED widget for the camera feed indicator.

use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::feed::FeedStatus;

/// State of a status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLedState {
    /// Live - green.
    Active,
    /// Failed - red.
    Inactive,
    /// Transitioning - amber.
    Warning,
    /// Off - gray.
    Unknown,
}

impl StatusLedState {
    /// Get the color for this state.
    fn color(&self) -> iced::Color {
        match self {
            StatusLedState::Active => iced::Color::from_rgb(0.2, 0.8, 0.3), // Green
            StatusLedState::Inactive => iced::Color::from_rgb(0.9, 0.2, 0.2), // Red
            StatusLedState::Warning => iced::Color::from_rgb(0.9, 0.7, 0.2), // Amber
            StatusLedState::Unknown => iced::Color::from_rgb(0.5, 0.5, 0.5), // Gray
        }
    }
}

impl From<&FeedStatus> for StatusLedState {
    fn from(status: &FeedStatus) -> Self {
        match status {
            FeedStatus::Idle => StatusLedState::Unknown,
            FeedStatus::Connecting => StatusLedState::Warning,
            FeedStatus::Connected => StatusLedState::Active,
            FeedStatus::Error(_) => StatusLedState::Inactive,
        }
    }
}

/// A status LED indicator widget.
pub struct StatusLed {
    /// Current state.
    state: StatusLedState,
    /// Optional label text.
    label: Option<String>,
    /// Size of the LED (diameter).
    size: f32,
}

impl StatusLed {
    /// Create a new status LED.
    pub fn new(state: StatusLedState) -> Self {
        Self {
            state,
            label: None,
            size: 10.0,
        }
    }

    /// Create an LED reflecting the feed status, labelled with its badge.
    pub fn for_feed(status: &FeedStatus) -> Self {
        Self::new(StatusLedState::from(status)).with_label(status.badge())
    }

    /// Add a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Render the status LED as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let color = self.state.color();
        let size = self.size;

        let led = container(text(""))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(color)),
                border: iced::Border {
                    color: iced::Color::from_rgb(0.3, 0.3, 0.3),
                    width: 1.0,
                    radius: (size / 2.0).into(),
                },
                ..Default::default()
            });

        let mut content = row![led].spacing(6).align_y(Alignment::Center);

        if let Some(label) = self.label {
            content = content.push(text(label).size(12));
        }

        content.into()
    }
}
