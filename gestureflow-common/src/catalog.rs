//! Seed catalog of gestures and functions.
//!
//! The built-in catalog is one immutable, process-wide value. Registries
//! copy from it at construction and never write back.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gesture::{Function, Gesture};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    gestures: vec![
        Gesture::new("swipe_left", "Swipe Left")
            .with_description("Move hand from right to left")
            .with_icon("👈"),
        Gesture::new("swipe_right", "Swipe Right")
            .with_description("Move hand from left to right")
            .with_icon("👉"),
        Gesture::new("swipe_up", "Swipe Up")
            .with_description("Move hand from bottom to top")
            .with_icon("👆")
            .with_active(false),
        Gesture::new("swipe_down", "Swipe Down")
            .with_description("Move hand from top to bottom")
            .with_icon("👇")
            .with_active(false),
        Gesture::new("pinch", "Pinch")
            .with_description("Bring thumb and index finger together")
            .with_icon("🤏"),
        Gesture::new("zoom", "Zoom")
            .with_description("Spread thumb and index finger apart")
            .with_icon("👌"),
        Gesture::new("fist", "Fist")
            .with_description("Close hand into a fist")
            .with_icon("✊")
            .with_active(false),
        Gesture::new("wave", "Wave")
            .with_description("Wave hand side to side")
            .with_icon("👋")
            .with_active(false),
    ],
    functions: vec![
        Function::new("volume_up", "Volume Up")
            .with_description("Increase system volume")
            .with_icon("🔊")
            .with_gesture("swipe_up"),
        Function::new("volume_down", "Volume Down")
            .with_description("Decrease system volume")
            .with_icon("🔉")
            .with_gesture("swipe_down"),
        Function::new("next_track", "Next Track")
            .with_description("Play next music track")
            .with_icon("⏭️")
            .with_gesture("swipe_right"),
        Function::new("prev_track", "Previous Track")
            .with_description("Play previous music track")
            .with_icon("⏮️")
            .with_gesture("swipe_left"),
        Function::new("play_pause", "Play/Pause")
            .with_description("Toggle media playback")
            .with_icon("⏯️")
            .with_gesture("fist"),
        Function::new("zoom_in", "Zoom In")
            .with_description("Increase zoom level")
            .with_icon("🔍")
            .with_gesture("zoom"),
        Function::new("zoom_out", "Zoom Out")
            .with_description("Decrease zoom level")
            .with_icon("🔎")
            .with_gesture("pinch"),
    ],
});

/// Gesture and function definitions used to seed the registries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Gesture definitions, in display order.
    #[serde(default)]
    pub gestures: Vec<Gesture>,

    /// Function definitions, in display order.
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl Catalog {
    /// The built-in catalog shipped with the application.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Check that gesture ids and function ids are unique.
    ///
    /// Function assignments are not checked against the gesture list.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for gesture in &self.gestures {
            if gesture.id.is_empty() {
                return Err(Error::Config("Gesture id cannot be empty".to_string()));
            }
            if !seen.insert(gesture.id.as_str()) {
                return Err(Error::Config(format!(
                    "Duplicate gesture id in catalog: {}",
                    gesture.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for function in &self.functions {
            if function.id.is_empty() {
                return Err(Error::Config("Function id cannot be empty".to_string()));
            }
            if !seen.insert(function.id.as_str()) {
                return Err(Error::Config(format!(
                    "Duplicate function id in catalog: {}",
                    function.id
                )));
            }
        }

        Ok(())
    }

    /// Function assignments that do not resolve to a catalog gesture.
    ///
    /// Returned as `(function_id, gesture_id)` pairs.
    pub fn dangling_assignments(&self) -> Vec<(&str, &str)> {
        self.functions
            .iter()
            .filter_map(|f| {
                let gesture_id = f.assigned_gesture.as_deref()?;
                let known = self.gestures.iter().any(|g| g.id == gesture_id);
                (!known).then_some((f.id.as_str(), gesture_id))
            })
            .collect()
    }
}
