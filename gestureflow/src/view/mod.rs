//! View components for the GestureFlow application.

pub mod components;
pub mod dashboard;
pub mod formatting;
pub mod functions;
pub mod gestures;
pub mod preview;
pub mod statistics;
pub mod theme;
