//! Dashboard composing the preview, statistics, gestures and mapping panels.

use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Length};

use gestureflow_common::{
    Function, FunctionRegistry, Gesture, GestureDetection, GestureFlowConfig, GestureRegistry,
    History,
};

use crate::feed::DetectionFeed;
use crate::message::Message;
use crate::view::functions::{GestureChoice, functions_view};
use crate::view::gestures::gestures_view;
use crate::view::preview::preview_view;
use crate::view::statistics::statistics_view;
use crate::view::theme;

/// A function binding being edited in the mapping panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEdit {
    /// Function being edited.
    pub function_id: String,
    /// Gesture picked so far (`None` = unassigned).
    pub selected: Option<String>,
}

/// Dashboard state: registries, history and panel UI state.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Gesture definitions.
    pub gestures: GestureRegistry,
    /// Function definitions and their bindings.
    pub functions: FunctionRegistry,
    /// Recognized detections, newest first.
    pub history: History,
    /// Number of detections listed under recent activity.
    pub recent_limit: usize,
    /// Whether the gestures panel lists inactive gestures.
    pub show_inactive: bool,
    /// Binding currently being edited, if any.
    pub editing: Option<MappingEdit>,
    /// Reject bindings to gestures missing from the registry.
    pub validate_bindings: bool,
    /// Last rejected binding, shown in the mapping panel.
    pub mapping_error: Option<String>,
}

impl DashboardState {
    /// Build the dashboard from configuration, seeding both registries.
    pub fn from_config(config: &GestureFlowConfig) -> Self {
        let catalog = config.catalog();
        Self {
            gestures: GestureRegistry::from_catalog(catalog),
            functions: FunctionRegistry::from_catalog(catalog),
            history: History::with_capacity(config.history.capacity),
            recent_limit: config.history.recent_limit,
            show_inactive: false,
            editing: None,
            validate_bindings: config.mapping.validate_bindings,
            mapping_error: None,
        }
    }

    /// Feed a detection into the history.
    ///
    /// Returns whether it was retained ("no gesture" samples are not).
    pub fn record_detection(&mut self, detection: GestureDetection) -> bool {
        self.history.record(detection)
    }

    /// Flip a gesture's active flag (unknown ids are ignored).
    pub fn toggle_gesture(&mut self, gesture_id: &str) {
        self.gestures.toggle(gesture_id);
    }

    pub fn toggle_show_inactive(&mut self) {
        self.show_inactive = !self.show_inactive;
    }

    /// Gestures listed in the gestures panel.
    pub fn visible_gestures(&self) -> Vec<&Gesture> {
        self.gestures.list(self.show_inactive)
    }

    /// Detections listed under recent activity.
    pub fn recent_detections(&self) -> Vec<&GestureDetection> {
        self.history.recent(self.recent_limit).collect()
    }

    /// Start editing a function's binding, preselecting its current gesture.
    pub fn begin_edit(&mut self, function_id: &str) {
        let Some(function) = self.functions.get(function_id) else {
            tracing::debug!(function = %function_id, "Ignoring edit of unknown function");
            return;
        };

        self.editing = Some(MappingEdit {
            function_id: function.id.clone(),
            selected: function.assigned_gesture.clone(),
        });
        self.mapping_error = None;
    }

    /// Change the gesture picked in the open editor.
    pub fn select_edit_gesture(&mut self, gesture_id: Option<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.selected = gesture_id;
        }
    }

    /// Apply the open edit to the function registry and close the editor.
    ///
    /// With binding validation enabled, a rejected binding keeps the editor
    /// open and records the error instead.
    pub fn save_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };

        if self.validate_bindings {
            if let Err(e) = self.functions.rebind_checked(
                &edit.function_id,
                edit.selected.as_deref(),
                &self.gestures,
            ) {
                tracing::warn!(error = %e, "Rejected function binding");
                self.mapping_error = Some(e.to_string());
                self.editing = Some(edit);
                return;
            }
        } else {
            self.functions
                .rebind(&edit.function_id, edit.selected.as_deref());
        }

        tracing::info!(
            function = %edit.function_id,
            gesture = ?edit.selected,
            "Saved function mapping"
        );
        self.mapping_error = None;
    }

    /// Close the editor without changing anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.mapping_error = None;
    }

    /// Whether `function_id` is the one being edited.
    pub fn is_editing(&self, function_id: &str) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|e| e.function_id == function_id)
    }

    /// Options for the mapping editor: "None" followed by every gesture.
    pub fn gesture_choices(&self) -> Vec<GestureChoice> {
        std::iter::once(GestureChoice::none())
            .chain(
                self.gestures
                    .list(true)
                    .into_iter()
                    .map(GestureChoice::from_gesture),
            )
            .collect()
    }

    /// The choice matching the open editor's selection.
    pub fn selected_choice(&self) -> Option<GestureChoice> {
        let edit = self.editing.as_ref()?;
        let name =
            FunctionRegistry::resolve_gesture_name(&self.gestures, edit.selected.as_deref());
        Some(GestureChoice {
            gesture_id: edit.selected.clone(),
            name: name.to_string(),
        })
    }

    /// Display name of the gesture bound to `function`.
    pub fn binding_label(&self, function: &Function) -> &str {
        FunctionRegistry::resolve_gesture_name(&self.gestures, function.assigned_gesture.as_deref())
    }

    /// Functions triggered by a detection.
    pub fn triggered_functions(&self, detection: &GestureDetection) -> Vec<&Function> {
        detection
            .gesture_id
            .as_deref()
            .map(|id| self.functions.bound_to(id))
            .unwrap_or_default()
    }
}

/// Render the dashboard view.
pub fn dashboard_view<'a>(
    state: &'a DashboardState,
    feed: &'a DetectionFeed,
) -> Element<'a, Message> {
    let header = column![
        text("Gesture Control Dashboard").size(26),
        text("Manage your gesture controls and functions")
            .size(14)
            .style(theme::muted_text),
    ]
    .spacing(4);

    let left = column![preview_view(state, feed), statistics_view(state)]
        .spacing(20)
        .width(Length::FillPortion(2));

    let right = column![gestures_view(state), functions_view(state)]
        .spacing(20)
        .width(Length::FillPortion(1));

    let content = column![header, row![left, right].spacing(20)]
        .spacing(20)
        .padding(20);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestureflow_common::parse_config;

    fn dashboard() -> DashboardState {
        DashboardState::from_config(&GestureFlowConfig::default())
    }

    #[test]
    fn test_visible_gestures_follow_show_inactive() {
        let mut state = dashboard();
        assert_eq!(state.visible_gestures().len(), 4);

        state.toggle_show_inactive();
        assert_eq!(state.visible_gestures().len(), 8);

        state.toggle_show_inactive();
        state.toggle_gesture("pinch");
        assert_eq!(state.visible_gestures().len(), 3);
    }

    #[test]
    fn test_edit_save_flow() {
        let mut state = dashboard();
        state.begin_edit("volume_up");
        assert!(state.is_editing("volume_up"));
        assert_eq!(
            state.selected_choice().unwrap().gesture_id.as_deref(),
            Some("swipe_up")
        );

        state.select_edit_gesture(Some("wave".to_string()));
        state.save_edit();

        assert!(state.editing.is_none());
        let function = state.functions.get("volume_up").unwrap();
        assert_eq!(state.binding_label(function), "Wave");
    }

    #[test]
    fn test_edit_cancel_leaves_binding() {
        let mut state = dashboard();
        state.begin_edit("zoom_in");
        state.select_edit_gesture(None);
        state.cancel_edit();

        assert!(state.editing.is_none());
        assert_eq!(
            state
                .functions
                .get("zoom_in")
                .unwrap()
                .assigned_gesture
                .as_deref(),
            Some("zoom")
        );
    }

    #[test]
    fn test_save_none_unbinds() {
        let mut state = dashboard();
        state.begin_edit("zoom_in");
        state.select_edit_gesture(None);
        state.save_edit();

        let function = state.functions.get("zoom_in").unwrap();
        assert!(!function.is_mapped());
        assert_eq!(state.binding_label(function), "None");
        assert_eq!(state.functions.mapped_count(), 6);
    }

    #[test]
    fn test_begin_edit_unknown_function() {
        let mut state = dashboard();
        state.begin_edit("launch_rocket");
        assert!(state.editing.is_none());
        assert!(state.selected_choice().is_none());
    }

    #[test]
    fn test_validated_binding_rejects_unknown_gesture() {
        let config: GestureFlowConfig =
            parse_config("{ mapping: { validate_bindings: true } }").unwrap();
        let mut state = DashboardState::from_config(&config);

        state.begin_edit("zoom_in");
        state.select_edit_gesture(Some("moonwalk".to_string()));
        state.save_edit();

        assert!(state.is_editing("zoom_in"));
        assert!(state.mapping_error.as_deref().unwrap().contains("moonwalk"));
        assert_eq!(
            state
                .functions
                .get("zoom_in")
                .unwrap()
                .assigned_gesture
                .as_deref(),
            Some("zoom")
        );

        state.cancel_edit();
        assert!(state.mapping_error.is_none());
    }

    #[test]
    fn test_permissive_binding_accepts_unknown_gesture() {
        let mut state = dashboard();
        state.begin_edit("zoom_in");
        state.select_edit_gesture(Some("moonwalk".to_string()));
        state.save_edit();

        let function = state.functions.get("zoom_in").unwrap();
        assert_eq!(state.binding_label(function), "Unknown");
    }

    #[test]
    fn test_gesture_choices() {
        let state = dashboard();
        let choices = state.gesture_choices();
        assert_eq!(choices.len(), 9);
        assert_eq!(choices[0], GestureChoice::none());
        assert_eq!(choices[1].gesture_id.as_deref(), Some("swipe_left"));
        assert_eq!(choices[1].to_string(), "Swipe Left");
    }

    #[test]
    fn test_record_and_triggered_functions() {
        let mut state = dashboard();
        assert!(!state.record_detection(GestureDetection::none(0.9, 1)));

        let detection = GestureDetection::new(Some("pinch".to_string()), 0.9, 2);
        assert!(state.record_detection(detection.clone()));
        assert_eq!(state.recent_detections().len(), 1);

        let triggered: Vec<_> = state
            .triggered_functions(&detection)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(triggered, vec!["Zoom Out"]);
    }

    #[test]
    fn test_recent_limit_from_config() {
        let mut state = dashboard();
        for ts in 0..8 {
            state.record_detection(GestureDetection::new(Some("zoom".to_string()), 0.7, ts));
        }
        assert_eq!(state.recent_detections().len(), 5);
        assert_eq!(state.history.total_count(), 8);
    }
}
