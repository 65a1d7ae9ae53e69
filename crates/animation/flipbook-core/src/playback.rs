//! Frame-advance scheduler for the active clip.
//!
//! One `Playback` exists per controller. It is driven by `advance(dt)` with an
//! elapsed-time accumulator; replacing it is the only way to cancel it.

use crate::clip::Clip;
use crate::ids::{ClipId, StateId};
use crate::outputs::{Outputs, PlaybackEvent};

/// Tolerance absorbing float drift when `dt` is an exact multiple of the frame duration.
const TIME_EPSILON: f32 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct Playback {
    state: StateId,
    clip: ClipId,
    /// Index of the frame the next step will show; may equal `len` on a finished clip.
    next_frame: usize,
    /// Index of the frame currently on screen.
    shown_frame: usize,
    elapsed: f32,
    frame_duration: f32,
    finished: bool,
}

impl Playback {
    /// Begin playing `clip` from frame 0. The first frame is shown immediately.
    pub(crate) fn start(state: StateId, clip_id: ClipId, clip: &Clip, out: &mut Outputs) -> Self {
        let mut playback = Self {
            state,
            clip: clip_id,
            next_frame: 0,
            shown_frame: 0,
            elapsed: 0.0,
            frame_duration: clip.frame_duration(),
            finished: false,
        };
        playback.step(clip, out);
        playback
    }

    #[inline]
    pub fn state(&self) -> StateId {
        self.state
    }

    #[inline]
    pub fn clip(&self) -> ClipId {
        self.clip
    }

    #[inline]
    pub fn shown_frame(&self) -> usize {
        self.shown_frame
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Accumulate `dt` seconds and take every step that became due, up to `max_steps`.
    /// Returns the number of steps taken.
    pub(crate) fn advance(
        &mut self,
        dt: f32,
        clip: &Clip,
        out: &mut Outputs,
        max_steps: u32,
    ) -> u32 {
        if self.finished {
            return 0;
        }
        self.elapsed += dt;
        let mut steps = 0;
        while !self.finished && self.elapsed + TIME_EPSILON >= self.frame_duration {
            if steps >= max_steps {
                log::warn!(
                    "clip '{}' fell behind by {:.3}s; dropping the backlog",
                    clip.name,
                    self.elapsed
                );
                self.elapsed = 0.0;
                break;
            }
            self.elapsed = (self.elapsed - self.frame_duration).max(0.0);
            self.step(clip, out);
            steps += 1;
        }
        steps
    }

    /// Show the next frame and fire its actions, or finish when a non-looping clip has
    /// already shown its last frame.
    fn step(&mut self, clip: &Clip, out: &mut Outputs) {
        let Some(frame) = clip.frames.get(self.next_frame) else {
            self.finished = true;
            self.elapsed = 0.0;
            log::trace!("clip '{}' finished", clip.name);
            out.push(PlaybackEvent::PlaybackFinished { state: self.state });
            return;
        };

        let index = self.next_frame;
        self.shown_frame = index;
        log::trace!("clip '{}' frame {}", clip.name, index);
        out.push(PlaybackEvent::FrameShown {
            state: self.state,
            frame_index: index,
            frame: frame.clone(),
        });
        for action in clip.actions_at(index) {
            out.push(PlaybackEvent::ActionFired {
                state: self.state,
                frame_index: index,
                action: action.to_string(),
            });
        }

        self.next_frame += 1;
        if self.next_frame >= clip.len() && clip.looping {
            self.next_frame = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(clip: &Clip, ticks: usize) -> (Playback, Outputs) {
        let mut out = Outputs::default();
        let mut pb = Playback::start(StateId(0), ClipId(0), clip, &mut out);
        let dt = clip.frame_duration();
        for _ in 0..ticks {
            pb.advance(dt, clip, &mut out, 64);
        }
        (pb, out)
    }

    #[test]
    fn start_shows_first_frame_immediately() {
        let clip = Clip::new("c", ["f0", "f1"], 10.0);
        let (pb, out) = run(&clip, 0);
        assert_eq!(out.frames().collect::<Vec<_>>(), vec![0]);
        assert_eq!(pb.shown_frame(), 0);
    }

    #[test]
    fn partial_dt_does_not_step() {
        let clip = Clip::new("c", ["f0", "f1"], 10.0);
        let mut out = Outputs::default();
        let mut pb = Playback::start(StateId(0), ClipId(0), &clip, &mut out);
        assert_eq!(pb.advance(0.04, &clip, &mut out, 64), 0);
        assert_eq!(pb.advance(0.04, &clip, &mut out, 64), 0);
        assert_eq!(pb.advance(0.04, &clip, &mut out, 64), 1);
        assert_eq!(pb.shown_frame(), 1);
    }

    #[test]
    fn large_dt_catches_up_several_frames() {
        let clip = Clip::new("c", ["f0", "f1", "f2", "f3"], 10.0);
        let mut out = Outputs::default();
        let mut pb = Playback::start(StateId(0), ClipId(0), &clip, &mut out);
        assert_eq!(pb.advance(0.35, &clip, &mut out, 64), 3);
        assert_eq!(out.frames().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn step_cap_drops_backlog() {
        let clip = Clip::new("c", ["f0", "f1"], 10.0);
        let mut out = Outputs::default();
        let mut pb = Playback::start(StateId(0), ClipId(0), &clip, &mut out);
        assert_eq!(pb.advance(10.0, &clip, &mut out, 3), 3);
        // backlog dropped: a partial tick afterwards does nothing
        assert_eq!(pb.advance(0.05, &clip, &mut out, 3), 0);
    }

    #[test]
    fn non_looping_clip_finishes_one_frame_after_last() {
        let clip = Clip::new("c", ["f0", "f1", "f2"], 10.0).with_loop(false);
        let (pb, out) = run(&clip, 2);
        assert!(!pb.is_finished());
        assert_eq!(pb.shown_frame(), 2);

        let (pb, out2) = run(&clip, 6);
        assert!(pb.is_finished());
        assert_eq!(pb.shown_frame(), 2);
        assert_eq!(out.frames().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(out2.frames().collect::<Vec<_>>(), vec![0, 1, 2]);
        let finished = out2
            .events
            .iter()
            .filter(|e| matches!(e, PlaybackEvent::PlaybackFinished { .. }))
            .count();
        assert_eq!(finished, 1);
    }

    #[test]
    fn single_frame_looping_clip_repeats_its_frame() {
        let clip = Clip::new("c", ["only"], 5.0).with_event(0, ["tick"]);
        let (_, out) = run(&clip, 3);
        assert_eq!(out.frames().collect::<Vec<_>>(), vec![0, 0, 0, 0]);
        assert_eq!(out.actions().count(), 4);
    }
}
