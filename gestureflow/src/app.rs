//! GestureFlow Iced application.

use iced::{Element, Subscription, Task, Theme};

use gestureflow_common::{GestureFlowConfig, current_timestamp_millis};

use crate::feed::{DetectionFeed, FeedStatus};
use crate::message::Message;
use crate::subscription::{connect_after, feed_tick_subscription};
use crate::view::dashboard::{DashboardState, dashboard_view};

/// The main GestureFlow application.
pub struct GestureFlow {
    /// Simulated camera feed.
    feed: DetectionFeed,
    /// Registries, history and panel state.
    dashboard: DashboardState,
}

impl GestureFlow {
    /// Boot the application from a validated configuration.
    pub fn new(config: GestureFlowConfig) -> (Self, Task<Message>) {
        let app = Self {
            feed: DetectionFeed::from_config(&config.feed),
            dashboard: DashboardState::from_config(&config),
        };

        tracing::info!(
            gestures = app.dashboard.gestures.len(),
            functions = app.dashboard.functions.len(),
            "GestureFlow ready"
        );

        (app, Task::none())
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        match self.feed.status() {
            FeedStatus::Idle => "GestureFlow".to_string(),
            status => format!("GestureFlow - {}", status.badge()),
        }
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartFeed => {
                if let Some(session) = self.feed.start() {
                    return connect_after(session, self.feed.connect_delay());
                }
            }

            Message::StopFeed => {
                self.feed.stop();
            }

            Message::FeedConnected(session) => {
                self.feed.connect(session);
            }

            Message::FeedTick(session) => {
                if let Some(detection) = self.feed.tick(session, current_timestamp_millis()) {
                    tracing::debug!(
                        gesture = ?detection.gesture_id,
                        confidence = detection.confidence,
                        "Detection"
                    );
                    self.dashboard.record_detection(detection);
                }
            }

            Message::ToggleGesture(gesture_id) => {
                self.dashboard.toggle_gesture(&gesture_id);
            }

            Message::ToggleShowInactive => {
                self.dashboard.toggle_show_inactive();
            }

            Message::EditMapping(function_id) => {
                self.dashboard.begin_edit(&function_id);
            }

            Message::SelectMappingGesture(choice) => {
                self.dashboard.select_edit_gesture(choice.gesture_id);
            }

            Message::SaveMapping => {
                self.dashboard.save_edit();
            }

            Message::CancelMapping => {
                self.dashboard.cancel_edit();
            }
        }

        Task::none()
    }

    /// Emit feed ticks only while the camera is connected.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.feed.is_connected() {
            feed_tick_subscription(self.feed.session(), self.feed.tick_interval())
        } else {
            Subscription::none()
        }
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        dashboard_view(&self.dashboard, &self.feed)
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn feed(&self) -> &DetectionFeed {
        &self.feed
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }
}
