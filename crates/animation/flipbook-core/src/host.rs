//! Host collaborator contract.
//!
//! The core never renders or runs gameplay code itself. A host applies frame references to
//! whatever draws them and runs the named actions bound to frames. Adapters implement
//! [`AnimationHost`] and feed it [`Outputs`] through [`dispatch`].

use crate::clip::FrameRef;
use crate::ids::StateId;
use crate::outputs::{Outputs, PlaybackEvent};

pub trait AnimationHost {
    /// Error produced by a failing action; propagated to the caller untouched.
    type Error;

    fn set_current_frame(&mut self, frame: &FrameRef);

    fn invoke_action(&mut self, action: &str) -> Result<(), Self::Error>;

    fn state_changed(&mut self, _from: Option<StateId>, _to: StateId) {}

    fn playback_finished(&mut self, _state: StateId) {}
}

/// Apply `outputs` to `host` in recorded order. Stops at the first failing action.
pub fn dispatch<H>(outputs: &Outputs, host: &mut H) -> Result<(), H::Error>
where
    H: AnimationHost + ?Sized,
{
    for event in &outputs.events {
        match event {
            PlaybackEvent::StateEntered { from, to } => host.state_changed(*from, *to),
            PlaybackEvent::FrameShown { frame, .. } => host.set_current_frame(frame),
            PlaybackEvent::ActionFired { action, .. } => host.invoke_action(action)?,
            PlaybackEvent::PlaybackFinished { state } => host.playback_finished(*state),
        }
    }
    Ok(())
}
