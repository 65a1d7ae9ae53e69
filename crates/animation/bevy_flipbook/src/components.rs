use bevy::prelude::*;
use flipbook_core::{parse_stored_controller_json, Config, Controller};

/// Drives the `Handle<Image>` on the same entity from a flipbook controller.
///
/// Gameplay systems set parameters through `animator.0.set_parameter(..)`; the resulting
/// frame change reaches the sprite on the next `Update`.
#[derive(Component, Debug)]
pub struct FlipbookAnimator(pub Controller);

impl FlipbookAnimator {
    pub fn new(controller: Controller) -> Self {
        Self(controller)
    }

    /// Build from a stored controller JSON document.
    pub fn from_json(json: &str, cfg: Config) -> flipbook_core::Result<Self> {
        let graph = parse_stored_controller_json(json)?;
        Ok(Self(Controller::new(graph, cfg)?))
    }
}
