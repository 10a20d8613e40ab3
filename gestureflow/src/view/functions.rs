//! Function mapping panel.

use iced::widget::{Column, button, column, container, pick_list, row, rule, text};
use iced::{Alignment, Element, Length, Theme};

use gestureflow_common::{Function, Gesture};
use gestureflow_common::registry::UNASSIGNED_LABEL;

use crate::message::Message;
use crate::view::dashboard::DashboardState;
use crate::view::theme;

/// Option in the mapping editor's gesture picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureChoice {
    /// Gesture to bind, or `None` to unbind.
    pub gesture_id: Option<String>,
    /// Label shown in the picker.
    pub name: String,
}

impl GestureChoice {
    /// The "None" choice, which unbinds the function.
    pub fn none() -> Self {
        Self {
            gesture_id: None,
            name: UNASSIGNED_LABEL.to_string(),
        }
    }

    pub fn from_gesture(gesture: &Gesture) -> Self {
        Self {
            gesture_id: Some(gesture.id.clone()),
            name: gesture.name.clone(),
        }
    }
}

impl std::fmt::Display for GestureChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Render the function mapping panel.
pub fn functions_view(state: &DashboardState) -> Element<'_, Message> {
    let header = column![
        text("Function Mapping").size(18),
        text("Assign gestures to functions")
            .size(12)
            .style(theme::muted_text),
    ]
    .spacing(2);

    let mut list = Column::new().spacing(8);
    for function in state.functions.list() {
        list = list.push(render_function_row(state, function));
    }

    if state.functions.is_empty() {
        list = list.push(
            text("No functions available")
                .size(13)
                .style(theme::dimmed_text),
        );
    }

    let footer = text(format!(
        "{} of {} functions mapped to gestures",
        state.functions.mapped_count(),
        state.functions.len()
    ))
    .size(11)
    .style(theme::muted_text);

    container(column![header, list, rule::horizontal(1), footer].spacing(12))
        .padding(16)
        .width(Length::Fill)
        .style(theme::panel)
        .into()
}

/// Render one function, in display or edit mode.
fn render_function_row<'a>(state: &'a DashboardState, function: &'a Function) -> Element<'a, Message> {
    let info = row![
        text(&function.icon).size(18),
        column![
            text(&function.name).size(14),
            text(&function.description)
                .size(11)
                .style(theme::muted_text),
        ]
        .spacing(2)
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    if state.is_editing(&function.id) {
        let picker = pick_list(
            state.gesture_choices(),
            state.selected_choice(),
            Message::SelectMappingGesture,
        )
        .text_size(12)
        .width(Length::Fill);

        let cancel_btn = button(text("Cancel").size(11))
            .on_press(Message::CancelMapping)
            .style(iced::widget::button::secondary);

        let save_btn = button(text("Save").size(11))
            .on_press(Message::SaveMapping)
            .style(iced::widget::button::primary);

        let mut content = column![
            info,
            row![picker, cancel_btn, save_btn]
                .spacing(6)
                .align_y(Alignment::Center),
        ]
        .spacing(8);

        if let Some(error) = &state.mapping_error {
            content = content.push(text(error).size(11).style(|t: &Theme| text::Style {
                color: Some(theme::colors(t).danger()),
            }));
        }

        container(content)
            .padding(10)
            .width(Length::Fill)
            .style(theme::row_item_selected)
            .into()
    } else {
        let binding = text(state.binding_label(function))
            .size(12)
            .style(if function.is_mapped() {
                theme::muted_text
            } else {
                theme::dimmed_text
            });

        let edit_btn = button(text("Edit").size(11))
            .on_press(Message::EditMapping(function.id.clone()))
            .style(iced::widget::button::secondary);

        container(
            row![
                container(info).width(Length::Fill),
                binding,
                edit_btn
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .padding(10)
        .width(Length::Fill)
        .style(theme::row_item)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_choice() {
        let choice = GestureChoice::none();
        assert!(choice.gesture_id.is_none());
        assert_eq!(choice.to_string(), "None");
    }

    #[test]
    fn test_choice_from_gesture() {
        let gesture = Gesture::new("wave", "Wave");
        let choice = GestureChoice::from_gesture(&gesture);
        assert_eq!(choice.gesture_id.as_deref(), Some("wave"));
        assert_eq!(choice.to_string(), "Wave");
    }
}
