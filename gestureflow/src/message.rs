use crate::feed::SessionId;
use crate::view::functions::GestureChoice;

/// Messages for the GestureFlow application.
#[derive(Debug, Clone)]
pub enum Message {
    // Detection feed
    /// User pressed Start in the preview panel.
    StartFeed,

    /// User pressed Stop in the preview panel.
    StopFeed,

    /// Connect delay elapsed for the given session.
    FeedConnected(SessionId),

    /// Emission interval elapsed for the given session.
    FeedTick(SessionId),

    // Gestures panel
    /// User flipped a gesture's active switch.
    ToggleGesture(String),

    /// User toggled visibility of inactive gestures.
    ToggleShowInactive,

    // Function mapping panel
    /// User started editing a function's gesture binding.
    EditMapping(String),

    /// User picked a gesture (or none) in the mapping editor.
    SelectMappingGesture(GestureChoice),

    /// User saved the mapping being edited.
    SaveMapping,

    /// User discarded the mapping being edited.
    CancelMapping,
}
