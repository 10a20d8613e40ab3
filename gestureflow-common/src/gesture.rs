use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A recognizable hand motion with display metadata and an enable flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    /// Stable identifier (e.g., "swipe_left").
    pub id: String,

    /// Display name (e.g., "Swipe Left").
    pub name: String,

    /// Short description of the motion.
    #[serde(default)]
    pub description: String,

    /// Icon glyph shown next to the name.
    #[serde(default)]
    pub icon: String,

    /// Whether the gesture is enabled.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Gesture {
    /// Create a new active gesture with no description or icon.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            is_active: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon glyph.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// A system action that can be bound to zero or one gesture.
///
/// `assigned_gesture` holds a gesture id only. Nothing guarantees the id
/// resolves in the gesture registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Stable identifier (e.g., "volume_up").
    pub id: String,

    /// Display name (e.g., "Volume Up").
    pub name: String,

    /// Short description of the action.
    #[serde(default)]
    pub description: String,

    /// Icon glyph shown next to the name.
    #[serde(default)]
    pub icon: String,

    /// Id of the gesture that triggers this function, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_gesture: Option<String>,
}

impl Function {
    /// Create a new unassigned function with no description or icon.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            assigned_gesture: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon glyph.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Bind to a gesture id.
    pub fn with_gesture(mut self, gesture_id: impl Into<String>) -> Self {
        self.assigned_gesture = Some(gesture_id.into());
        self
    }

    /// Whether this function is bound to a gesture.
    pub fn is_mapped(&self) -> bool {
        self.assigned_gesture.is_some()
    }
}

/// A timestamped, confidence-scored observation of a gesture.
///
/// A `None` gesture id is a "no gesture" sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureDetection {
    /// Detected gesture id, or `None` if nothing was recognized.
    pub gesture_id: Option<String>,

    /// Detection confidence in [0, 1].
    pub confidence: f64,

    /// Unix epoch milliseconds of the observation.
    pub timestamp: i64,
}

impl GestureDetection {
    /// Create a detection, clamping confidence into [0, 1].
    pub fn new(gesture_id: Option<String>, confidence: f64, timestamp: i64) -> Self {
        Self {
            gesture_id,
            confidence: confidence.clamp(0.0, 1.0),
            timestamp,
        }
    }

    /// Create a detection of the given gesture stamped with the current time.
    pub fn now(gesture_id: impl Into<String>, confidence: f64) -> Self {
        Self::new(
            Some(gesture_id.into()),
            confidence,
            current_timestamp_millis(),
        )
    }

    /// Create a "no gesture" sample.
    pub fn none(confidence: f64, timestamp: i64) -> Self {
        Self::new(None, confidence, timestamp)
    }

    /// Whether a gesture was recognized.
    pub fn is_gesture(&self) -> bool {
        self.gesture_id.is_some()
    }

    /// Display label for the detected gesture, derived from its id.
    pub fn display_name(&self) -> Option<String> {
        self.gesture_id.as_deref().map(display_name)
    }

    /// Confidence as a whole percentage.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Derive a display label from a gesture id.
///
/// Only the first underscore becomes a space: `"swipe_left"` gives
/// `"swipe left"`, but `"two_finger_tap"` gives `"two finger_tap"`.
/// Stats and preview labels depend on this exact output.
pub fn display_name(gesture_id: &str) -> String {
    gesture_id.replacen('_', " ", 1)
}

/// Get the current timestamp in milliseconds since Unix epoch.
///
/// Returns 0 if system time is before Unix epoch (should never happen in practice).
pub fn current_timestamp_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
