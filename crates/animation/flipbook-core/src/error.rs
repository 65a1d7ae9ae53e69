//! Error types for flipbook-core

use crate::ids::{ClipId, ParamId, StateId};

/// Errors raised while validating authored data or driving a controller.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FlipbookError {
    /// Clip has no frames to show
    #[error("Clip '{clip}' has no frames")]
    EmptyClip { clip: String },

    /// Clip frame rate is zero, negative or not finite
    #[error("Clip '{clip}' has invalid frame rate {frame_rate}")]
    InvalidFrameRate { clip: String, frame_rate: f32 },

    /// Clip event bound past the end of the frame list
    #[error("Clip '{clip}' binds an event to frame {frame} but has {frame_count} frames")]
    EventFrameOutOfRange {
        clip: String,
        frame: usize,
        frame_count: usize,
    },

    /// State references a clip that is not in the graph
    #[error("State '{state}' references unknown clip {clip:?}")]
    UnknownClip { state: String, clip: ClipId },

    /// Transition targets a state that is not in the graph
    #[error("State '{state}' has a transition to unknown state {target:?}")]
    UnknownTargetState { state: String, target: StateId },

    /// Transition is guarded by a parameter that is not in the graph
    #[error("State '{state}' has a transition guarded by unknown parameter {parameter:?}")]
    UnknownParameter { state: String, parameter: ParamId },

    /// No state id or name matched
    #[error("State not found: {state}")]
    StateNotFound { state: String },

    /// Graph has no default state to enter
    #[error("No default state configured")]
    MissingDefaultState,

    /// Stored format references a name that was never declared
    #[error("Unresolved {kind} reference '{name}'")]
    UnresolvedName { kind: &'static str, name: String },

    /// Stored format declares the same name twice
    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl FlipbookError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyClip { .. }
            | Self::InvalidFrameRate { .. }
            | Self::EventFrameOutOfRange { .. } => "clip",
            Self::UnknownClip { .. }
            | Self::UnknownTargetState { .. }
            | Self::UnknownParameter { .. }
            | Self::MissingDefaultState => "graph",
            Self::StateNotFound { .. } => "controller",
            Self::UnresolvedName { .. }
            | Self::DuplicateName { .. }
            | Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for FlipbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Result type used throughout flipbook-core
pub type Result<T> = core::result::Result<T, FlipbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let clip_error = FlipbookError::EmptyClip {
            clip: "idle".to_string(),
        };
        assert_eq!(clip_error.category(), "clip");

        assert_eq!(FlipbookError::MissingDefaultState.category(), "graph");

        let lookup = FlipbookError::StateNotFound {
            state: "run".to_string(),
        };
        assert_eq!(lookup.category(), "controller");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: FlipbookError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FlipbookError::Serialization { .. }));
        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn test_display_names_the_clip() {
        let err = FlipbookError::InvalidFrameRate {
            clip: "walk".to_string(),
            frame_rate: 0.0,
        };
        assert_eq!(err.to_string(), "Clip 'walk' has invalid frame rate 0");
    }
}
