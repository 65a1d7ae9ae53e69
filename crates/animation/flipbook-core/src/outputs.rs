//! Output contracts from the controller.
//!
//! Every state change, shown frame and fired action is recorded in order. Adapters
//! (Bevy, tests, custom hosts) drain the list and apply it to the host.

use serde::{Deserialize, Serialize};

use crate::clip::FrameRef;
use crate::ids::StateId;

/// Discrete signals emitted while entering states and stepping frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PlaybackEvent {
    StateEntered {
        from: Option<StateId>,
        to: StateId,
    },
    FrameShown {
        state: StateId,
        frame_index: usize,
        frame: FrameRef,
    },
    ActionFired {
        state: StateId,
        frame_index: usize,
        action: String,
    },
    /// A non-looping clip ran past its last frame.
    PlaybackFinished {
        state: StateId,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<PlaybackEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Drop the oldest `n` events.
    pub(crate) fn discard_front(&mut self, n: usize) {
        let n = n.min(self.events.len());
        self.events.drain(..n);
    }

    #[inline]
    pub fn push(&mut self, event: PlaybackEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Indices of shown frames, in order.
    pub fn frames(&self) -> impl Iterator<Item = usize> + '_ {
        self.events.iter().filter_map(|e| match e {
            PlaybackEvent::FrameShown { frame_index, .. } => Some(*frame_index),
            _ => None,
        })
    }

    /// Names of fired actions, in order.
    pub fn actions(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|e| match e {
            PlaybackEvent::ActionFired { action, .. } => Some(action.as_str()),
            _ => None,
        })
    }

    /// States entered, in order.
    pub fn entered_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.events.iter().filter_map(|e| match e {
            PlaybackEvent::StateEntered { to, .. } => Some(*to),
            _ => None,
        })
    }
}
