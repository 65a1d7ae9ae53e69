use bevy::prelude::*;
use flipbook_core::StateId;

/// A named action bound to a clip frame was reached.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct FrameActionEvent {
    pub entity: Entity,
    /// State whose clip showed the frame.
    pub state: StateId,
    pub frame_index: usize,
    pub action: String,
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct AnimatorStateChanged {
    pub entity: Entity,
    pub from: Option<StateId>,
    pub to: StateId,
}

/// A non-looping clip ran past its last frame.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AnimatorFinished {
    pub entity: Entity,
    pub state: StateId,
}
