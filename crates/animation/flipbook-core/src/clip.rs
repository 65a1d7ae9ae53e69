//! Clip data model: ordered sprite frames, playback rate, loop flag and frame events.

use serde::{Deserialize, Serialize};

use crate::error::{FlipbookError, Result};

/// Opaque reference to a sprite frame (small string key resolved by the host).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameRef(pub String);

impl FrameRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FrameRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FrameRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Binds a frame index to zero or more named actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameEvent {
    pub frame: usize,
    #[serde(default)]
    pub actions: Vec<String>,
}

fn default_frame_rate() -> f32 {
    12.0
}

fn default_loop() -> bool {
    true
}

/// Authored, immutable frame sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub name: String,
    pub frames: Vec<FrameRef>,
    /// Frames per second.
    #[serde(rename = "frameRate", default = "default_frame_rate")]
    pub frame_rate: f32,
    #[serde(rename = "loop", default = "default_loop")]
    pub looping: bool,
    #[serde(default)]
    pub events: Vec<FrameEvent>,
}

impl Clip {
    /// Looping clip with no events.
    pub fn new<I, F>(name: &str, frames: I, frame_rate: f32) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FrameRef>,
    {
        Self {
            name: name.to_string(),
            frames: frames.into_iter().map(Into::into).collect(),
            frame_rate,
            looping: true,
            events: Vec::new(),
        }
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Bind `actions` to `frame`. Events on the same frame fire in the order they were added.
    pub fn with_event<I, S>(mut self, frame: usize, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events.push(FrameEvent {
            frame,
            actions: actions.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seconds each frame stays on screen.
    #[inline]
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// All actions bound to `frame`, flattened in declaration order.
    pub fn actions_at(&self, frame: usize) -> impl Iterator<Item = &str> + '_ {
        self.events
            .iter()
            .filter(move |e| e.frame == frame)
            .flat_map(|e| e.actions.iter().map(String::as_str))
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(FlipbookError::EmptyClip {
                clip: self.name.clone(),
            });
        }
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(FlipbookError::InvalidFrameRate {
                clip: self.name.clone(),
                frame_rate: self.frame_rate,
            });
        }
        if let Some(e) = self.events.iter().find(|e| e.frame >= self.len()) {
            return Err(FlipbookError::EventFrameOutOfRange {
                clip: self.name.clone(),
                frame: e.frame,
                frame_count: self.len(),
            });
        }
        Ok(())
    }
}
