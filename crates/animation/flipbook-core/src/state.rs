//! States: one clip each, plus ordered outgoing transitions.

use serde::{Deserialize, Serialize};

use crate::ids::ClipId;
use crate::transition::Transition;

/// Named node playing one clip, with outgoing transitions in priority order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub clip: ClipId,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl State {
    pub fn new(name: &str, clip: ClipId) -> Self {
        Self {
            name: name.to_string(),
            clip,
            transitions: Vec::new(),
        }
    }
}
