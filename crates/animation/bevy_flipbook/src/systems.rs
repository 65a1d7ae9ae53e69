use bevy::log::warn;
use bevy::prelude::*;

use crate::components::FlipbookAnimator;
use crate::events::{AnimatorFinished, AnimatorStateChanged, FrameActionEvent};
use crate::resources::FrameAtlas;
use flipbook_core::PlaybackEvent;

/// Advance every animator by the frame delta and apply what it produced.
///
/// Events are sent in the order the controller emitted them. The sprite receives only the
/// last frame shown during the tick.
pub fn tick_animators_system(
    time: Res<Time>,
    atlas: Res<FrameAtlas>,
    mut animators: Query<(Entity, &mut FlipbookAnimator, &mut Handle<Image>)>,
    mut actions: EventWriter<FrameActionEvent>,
    mut changes: EventWriter<AnimatorStateChanged>,
    mut finished: EventWriter<AnimatorFinished>,
) {
    let dt = time.delta_seconds();
    for (entity, mut animator, mut image) in animators.iter_mut() {
        animator.0.update(dt);
        let outputs = animator.0.take_outputs();

        let mut next_image = None;
        for event in outputs.events {
            match event {
                PlaybackEvent::StateEntered { from, to } => {
                    changes.send(AnimatorStateChanged { entity, from, to });
                }
                PlaybackEvent::FrameShown { frame, .. } => match atlas.get(&frame) {
                    Some(handle) => next_image = Some(handle.clone()),
                    None => warn!("flipbook frame '{}' is not in the FrameAtlas", frame.as_str()),
                },
                PlaybackEvent::ActionFired {
                    state,
                    frame_index,
                    action,
                } => {
                    actions.send(FrameActionEvent {
                        entity,
                        state,
                        frame_index,
                        action,
                    });
                }
                PlaybackEvent::PlaybackFinished { state } => {
                    finished.send(AnimatorFinished { entity, state });
                }
                _ => {}
            }
        }

        // write only on an actual change
        if let Some(next) = next_image {
            if *image != next {
                *image = next;
            }
        }
    }
}
