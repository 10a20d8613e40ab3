//! Statistics panel: recent activity, per-gesture usage and totals.

use iced::widget::{Column, column, container, row, text};
use iced::{Alignment, Element, Length};

use gestureflow_common::{GestureDetection, UsageEntry};

use crate::message::Message;
use crate::view::components::ProgressBar;
use crate::view::dashboard::DashboardState;
use crate::view::formatting::{format_clock_time, format_confidence, format_times};
use crate::view::theme;

/// Render the statistics panel.
pub fn statistics_view(state: &DashboardState) -> Element<'_, Message> {
    let title = text("Statistics & Activity").size(18);

    let recent = column![
        text("Recent Activity").size(14),
        render_recent(state.recent_detections())
    ]
    .spacing(8)
    .width(Length::FillPortion(1));

    let usage = column![
        text("Gesture Usage").size(14),
        render_usage(state.history.usage_bars())
    ]
    .spacing(8)
    .width(Length::FillPortion(1));

    let mut content = column![title, row![recent, usage].spacing(20)].spacing(12);

    if !state.history.is_empty() {
        content = content.push(
            row![
                total_card("Total Gestures", state.history.total_count()),
                total_card("Unique Gestures", state.history.unique_count()),
            ]
            .spacing(10),
        );
    }

    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(theme::panel)
        .into()
}

fn render_recent(detections: Vec<&GestureDetection>) -> Element<'_, Message> {
    if detections.is_empty() {
        return text("No recent activity")
            .size(12)
            .style(theme::dimmed_text)
            .into();
    }

    detections
        .into_iter()
        .fold(Column::new().spacing(6), |col, detection| {
            let name = detection
                .display_name()
                .unwrap_or_else(|| "No gesture".to_string());

            col.push(
                container(
                    row![
                        container(
                            column![
                                text(name).size(13),
                                text(format!(
                                    "Confidence: {}",
                                    format_confidence(detection.confidence)
                                ))
                                .size(11)
                                .style(theme::muted_text),
                            ]
                            .spacing(2)
                        )
                        .width(Length::Fill),
                        text(format_clock_time(detection.timestamp))
                            .size(11)
                            .style(theme::dimmed_text),
                    ]
                    .align_y(Alignment::Center),
                )
                .padding(8)
                .width(Length::Fill)
                .style(theme::row_item),
            )
        })
        .into()
}

fn render_usage<'a>(bars: Vec<(UsageEntry, f32)>) -> Element<'a, Message> {
    if bars.is_empty() {
        return text("No usage data available")
            .size(12)
            .style(theme::dimmed_text)
            .into();
    }

    bars.into_iter()
        .fold(Column::new().spacing(10), |col, (entry, ratio)| {
            col.push(
                ProgressBar::new(ratio)
                    .with_label(entry.display_name)
                    .with_value(format_times(entry.count))
                    .view(),
            )
        })
        .into()
}

fn total_card<'a>(label: &'a str, value: usize) -> Element<'a, Message> {
    container(
        column![
            text(value.to_string()).size(22),
            text(label).size(11).style(theme::muted_text),
        ]
        .spacing(2)
        .align_x(Alignment::Center),
    )
    .padding(10)
    .center_x(Length::Fill)
    .style(theme::row_item)
    .into()
}
