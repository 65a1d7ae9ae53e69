//! Flipbook Core (engine-agnostic)
//!
//! Sprite frame animation driven by a finite state machine. A [`StateGraph`] holds the
//! authored clips, parameters, states and transitions; a [`Controller`] plays one state at a
//! time, evaluates transitions whenever a parameter is set, and records shown frames and
//! fired actions as [`Outputs`] for a host to apply.

pub mod clip;
pub mod config;
pub mod controller;
pub mod error;
pub mod graph;
pub mod host;
pub mod ids;
pub mod outputs;
pub mod parameter;
pub mod playback;
pub mod registry;
pub mod state;
pub mod stored_controller;
pub mod transition;

// Re-exports for consumers (adapters)
pub use clip::{Clip, FrameEvent, FrameRef};
pub use config::Config;
pub use controller::Controller;
pub use error::{FlipbookError, Result};
pub use graph::StateGraph;
pub use host::{dispatch, AnimationHost};
pub use ids::{ClipId, ParamId, StateId};
pub use outputs::{Outputs, PlaybackEvent};
pub use parameter::{Parameter, ParameterValue};
pub use playback::Playback;
pub use registry::ParameterRegistry;
pub use state::State;
pub use stored_controller::parse_stored_controller_json;
pub use transition::Transition;
