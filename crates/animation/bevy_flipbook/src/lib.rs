//! Bevy plugin that plays flipbook sprite animation controllers.
//!
//! Add [`FlipbookPlugin`], fill the [`FrameAtlas`] with the images your clips reference, and
//! spawn entities carrying a [`FlipbookAnimator`] next to their sprite's `Handle<Image>`.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

pub use components::FlipbookAnimator;
pub use events::{AnimatorFinished, AnimatorStateChanged, FrameActionEvent};
pub use resources::FrameAtlas;

/// System set containing the animator tick, for ordering gameplay systems around it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlipbookSet;

pub struct FlipbookPlugin;

impl Plugin for FlipbookPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameAtlas>()
            .add_event::<FrameActionEvent>()
            .add_event::<AnimatorStateChanged>()
            .add_event::<AnimatorFinished>()
            .add_systems(
                Update,
                systems::tick_animators_system.in_set(FlipbookSet),
            );
    }
}
