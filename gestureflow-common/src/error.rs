use thiserror::Error;

/// Kind of registry entry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Gesture,
    Function,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Gesture => write!(f, "Gesture"),
            EntityKind::Function => write!(f, "Function"),
        }
    }
}

/// Common error type for GestureFlow components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Function '{function_id}' cannot be bound to unknown gesture '{gesture_id}'")]
    InvalidReference {
        function_id: String,
        gesture_id: String,
    },
}

impl Error {
    pub(crate) fn gesture_not_found(id: &str) -> Self {
        Error::NotFound {
            kind: EntityKind::Gesture,
            id: id.to_string(),
        }
    }

    pub(crate) fn function_not_found(id: &str) -> Self {
        Error::NotFound {
            kind: EntityKind::Function,
            id: id.to_string(),
        }
    }
}

/// Result type alias using GestureFlow's Error.
pub type Result<T> = std::result::Result<T, Error>;
