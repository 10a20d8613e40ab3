//! Gestures panel with per-gesture enable switches.

use iced::widget::{Column, button, column, container, row, rule, text, toggler};
use iced::{Alignment, Element, Length};

use gestureflow_common::Gesture;

use crate::message::Message;
use crate::view::dashboard::DashboardState;
use crate::view::theme;

/// Render the gestures panel.
pub fn gestures_view(state: &DashboardState) -> Element<'_, Message> {
    let filter_label = if state.show_inactive {
        "Hide inactive"
    } else {
        "Show inactive"
    };

    let filter_btn = button(text(filter_label).size(11))
        .on_press(Message::ToggleShowInactive)
        .style(iced::widget::button::secondary);

    let header = row![
        container(
            column![
                text("Gestures").size(18),
                text("Enable or disable gestures")
                    .size(12)
                    .style(theme::muted_text),
            ]
            .spacing(2)
        )
        .width(Length::Fill),
        filter_btn
    ]
    .align_y(Alignment::Center);

    let visible = state.visible_gestures();

    let list: Element<'_, Message> = if visible.is_empty() {
        text("No gestures available")
            .size(13)
            .style(theme::dimmed_text)
            .into()
    } else {
        visible
            .into_iter()
            .fold(Column::new().spacing(8), |col, gesture| {
                col.push(render_gesture_row(gesture))
            })
            .into()
    };

    let footer = text(format!(
        "{} active of {} available gestures",
        state.gestures.active_count(),
        state.gestures.len()
    ))
    .size(11)
    .style(theme::muted_text);

    container(column![header, list, rule::horizontal(1), footer].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .style(theme::panel)
        .into()
}

fn render_gesture_row(gesture: &Gesture) -> Element<'_, Message> {
    let id = gesture.id.clone();
    let switch = toggler(gesture.is_active)
        .on_toggle(move |_| Message::ToggleGesture(id.clone()))
        .size(18);

    let name = if gesture.is_active {
        text(&gesture.name).size(14)
    } else {
        text(&gesture.name).size(14).style(theme::dimmed_text)
    };

    container(
        row![
            text(&gesture.icon).size(18),
            container(
                column![
                    name,
                    text(&gesture.description)
                        .size(11)
                        .style(theme::muted_text),
                ]
                .spacing(2)
            )
            .width(Length::Fill),
            switch
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(10)
    .width(Length::Fill)
    .style(theme::row_item)
    .into()
}
