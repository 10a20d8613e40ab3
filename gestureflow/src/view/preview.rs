//! Gesture preview panel showing the simulated camera feed.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};

use gestureflow_common::{GestureDetection, current_timestamp_millis};

use crate::feed::{DetectionFeed, FeedStatus};
use crate::message::Message;
use crate::view::components::{ProgressBar, StatusLed};
use crate::view::dashboard::DashboardState;
use crate::view::formatting::{format_confidence, format_relative};
use crate::view::theme;

/// Render the preview panel.
pub fn preview_view<'a>(state: &'a DashboardState, feed: &'a DetectionFeed) -> Element<'a, Message> {
    let header = row![
        container(
            column![
                text("Gesture Preview").size(18),
                text("Live camera feed with gesture detection")
                    .size(12)
                    .style(theme::muted_text),
            ]
            .spacing(2)
        )
        .width(Length::Fill),
        StatusLed::for_feed(feed.status()).with_size(12.0).view()
    ]
    .align_y(Alignment::Center);

    let screen = container(render_screen(state, feed))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(220.0))
        .style(theme::row_item);

    // Stop also cancels a pending connect and clears an error.
    let control = if *feed.status() != FeedStatus::Idle {
        button(text("Stop").size(13))
            .on_press(Message::StopFeed)
            .style(iced::widget::button::danger)
    } else {
        button(text("Start").size(13))
            .on_press(Message::StartFeed)
            .style(iced::widget::button::primary)
    };

    let current_name = feed
        .current()
        .and_then(GestureDetection::display_name)
        .unwrap_or_else(|| "None detected".to_string());

    let cards = row![
        info_card("Status", feed.status().description().to_string()),
        info_card("Current Gesture", current_name),
    ]
    .spacing(10);

    container(
        column![
            header,
            screen,
            row![container(text("")).width(Length::Fill), control],
            cards
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::panel)
    .into()
}

/// Content of the simulated camera screen for the current feed status.
fn render_screen<'a>(state: &'a DashboardState, feed: &'a DetectionFeed) -> Element<'a, Message> {
    match feed.status() {
        FeedStatus::Idle => column![
            text("Camera disabled").size(16).style(theme::muted_text),
            text("Press Start to begin gesture detection")
                .size(12)
                .style(theme::dimmed_text),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into(),
        FeedStatus::Connecting => text("Connecting to camera...")
            .size(16)
            .style(|t: &Theme| text::Style {
                color: Some(theme::colors(t).warning()),
            })
            .into(),
        FeedStatus::Error(reason) => column![
            text("Camera error").size(16).style(|t: &Theme| text::Style {
                color: Some(theme::colors(t).danger()),
            }),
            text(reason).size(12).style(theme::muted_text),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into(),
        FeedStatus::Connected => match feed.current() {
            Some(detection) => render_detection(state, detection),
            None => text("Waiting for gestures...")
                .size(14)
                .style(theme::muted_text)
                .into(),
        },
    }
}

fn render_detection<'a>(
    state: &'a DashboardState,
    detection: &'a GestureDetection,
) -> Element<'a, Message> {
    let Some(name) = detection.display_name() else {
        return text("No gesture").size(16).style(theme::dimmed_text).into();
    };

    let triggers: Vec<&str> = state
        .triggered_functions(detection)
        .into_iter()
        .map(|f| f.name.as_str())
        .collect();
    let triggers_label = if triggers.is_empty() {
        "Triggers: nothing".to_string()
    } else {
        format!("Triggers: {}", triggers.join(", "))
    };

    let confidence = ProgressBar::new(detection.confidence as f32)
        .with_label("Confidence")
        .with_value(format_confidence(detection.confidence))
        .with_height(8.0)
        .view();

    column![
        text(name).size(24).style(|t: &Theme| text::Style {
            color: Some(theme::colors(t).success()),
        }),
        container(confidence).width(Length::Fixed(240.0)),
        text(triggers_label).size(12).style(theme::muted_text),
        text(format_relative(detection.timestamp, current_timestamp_millis()))
            .size(11)
            .style(theme::dimmed_text),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

fn info_card<'a>(title: &'a str, value: String) -> Element<'a, Message> {
    container(
        column![
            text(title).size(11).style(theme::muted_text),
            text(value).size(14),
        ]
        .spacing(4),
    )
    .padding(10)
    .width(Length::Fill)
    .style(theme::row_item)
    .into()
}
