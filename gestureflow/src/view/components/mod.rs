//! Reusable UI components for the dashboard panels.

pub mod progress_bar;
pub mod status_led;

pub use progress_bar::ProgressBar;
pub use status_led::{StatusLed, StatusLedState};
