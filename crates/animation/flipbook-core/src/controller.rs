//! Controller: owns the state graph, the parameter registry and the single active playback.
//!
//! Methods:
//! - new (validate → registry → enter default state), set_parameter (evaluate transitions),
//!   play_state, update (advance scheduler), take_outputs / flush (drain to a host)

use crate::clip::{Clip, FrameRef};
use crate::config::Config;
use crate::error::{FlipbookError, Result};
use crate::graph::StateGraph;
use crate::host::{dispatch, AnimationHost};
use crate::ids::StateId;
use crate::outputs::{Outputs, PlaybackEvent};
use crate::parameter::ParameterValue;
use crate::playback::Playback;
use crate::registry::ParameterRegistry;

#[derive(Debug)]
pub struct Controller {
    cfg: Config,
    graph: StateGraph,
    registry: ParameterRegistry,
    current: StateId,
    playback: Playback,
    speed: f32,
    outputs: Outputs,
    /// Leading events already returned by the previous `update`.
    returned: usize,
}

fn sanitize_speed(speed: f32) -> f32 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        0.0
    }
}

impl Controller {
    /// Validate `graph`, build the parameter registry and enter the default state.
    /// The default state's first frame is recorded in the pending outputs.
    pub fn new(graph: StateGraph, cfg: Config) -> Result<Self> {
        graph.validate()?;
        let registry = ParameterRegistry::build(&graph);
        let current = graph
            .default_state()
            .ok_or(FlipbookError::MissingDefaultState)?;

        let mut outputs = Outputs::default();
        let playback = Self::start_playback(&graph, None, current, &mut outputs)?;

        Ok(Self {
            speed: sanitize_speed(cfg.speed),
            cfg,
            graph,
            registry,
            current,
            playback,
            outputs,
            returned: 0,
        })
    }

    fn start_playback(
        graph: &StateGraph,
        from: Option<StateId>,
        to: StateId,
        out: &mut Outputs,
    ) -> Result<Playback> {
        let state = graph.state(to).ok_or_else(|| FlipbookError::StateNotFound {
            state: format!("{to:?}"),
        })?;
        let clip = graph
            .clip(state.clip)
            .ok_or_else(|| FlipbookError::UnknownClip {
                state: state.name.clone(),
                clip: state.clip,
            })?;
        log::debug!("entering state '{}' (clip '{}')", state.name, clip.name);
        out.push(PlaybackEvent::StateEntered { from, to });
        Ok(Playback::start(to, state.clip, clip, out))
    }

    /// Cancel the running playback and play `state` from frame 0, even if it is already
    /// the current state.
    pub fn play_state(&mut self, state: StateId) -> Result<()> {
        let playback =
            Self::start_playback(&self.graph, Some(self.current), state, &mut self.outputs)?;
        self.current = state;
        self.playback = playback;
        Ok(())
    }

    pub fn play_state_by_name(&mut self, name: &str) -> Result<()> {
        let state = self
            .graph
            .state_by_name(name)
            .ok_or_else(|| FlipbookError::StateNotFound {
                state: name.to_string(),
            })?;
        self.play_state(state)
    }

    /// Set a registered parameter and evaluate the current state's transitions.
    ///
    /// Unknown names are ignored. Triggers are cleared after evaluation whether or not a
    /// transition fired. Returns the state entered, if any.
    pub fn set_parameter(&mut self, name: &str, value: bool) -> Option<StateId> {
        let id = self.registry.get(name)?;
        let param = self.graph.parameters_mut().get_mut(id.index())?;
        param.value = param.value.with_value(value);
        let is_trigger = param.value.is_trigger();

        let entered = self.check_transitions();
        if is_trigger {
            if let Some(p) = self.graph.parameters_mut().get_mut(id.index()) {
                p.value = ParameterValue::Trigger(false);
            }
        }
        entered
    }

    #[inline]
    pub fn set_bool(&mut self, name: &str, value: bool) -> Option<StateId> {
        self.set_parameter(name, value)
    }

    #[inline]
    pub fn set_trigger(&mut self, name: &str) -> Option<StateId> {
        self.set_parameter(name, true)
    }

    /// First satisfied transition of the current state wins.
    fn check_transitions(&mut self) -> Option<StateId> {
        let state = self.graph.state(self.current)?;
        let target = state
            .transitions
            .iter()
            .find(|t| t.is_satisfied(self.graph.parameters()))
            .map(|t| t.target)?;
        log::debug!("transition fired from '{}' to {:?}", state.name, target);
        match self.play_state(target) {
            Ok(()) => Some(target),
            // Targets are checked when the controller is built.
            Err(err) => {
                log::warn!("transition to {target:?} could not start: {err}");
                None
            }
        }
    }

    /// Advance playback by `dt` seconds (scaled by the current speed).
    ///
    /// Returns the events not yet seen by a previous `update`: anything queued by
    /// `set_parameter`/`play_state` since then, followed by this step's frames and actions.
    /// Events returned last time are dropped first unless taken with `take_outputs`.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.discard_front(self.returned);
        self.returned = 0;
        let scaled = if dt.is_finite() && dt > 0.0 {
            dt * self.speed
        } else {
            0.0
        };
        if scaled > 0.0 {
            if let Some(clip) = self.graph.clip(self.playback.clip()) {
                self.playback.advance(
                    scaled,
                    clip,
                    &mut self.outputs,
                    self.cfg.max_steps_per_update,
                );
            }
        }
        self.returned = self.outputs.events.len();
        &self.outputs
    }

    /// Advance by `dt` and dispatch everything pending to `host`.
    pub fn update_with<H>(&mut self, dt: f32, host: &mut H) -> core::result::Result<(), H::Error>
    where
        H: AnimationHost + ?Sized,
    {
        self.update(dt);
        self.flush(host)
    }

    /// Dispatch pending outputs to `host`, leaving the buffer empty.
    pub fn flush<H>(&mut self, host: &mut H) -> core::result::Result<(), H::Error>
    where
        H: AnimationHost + ?Sized,
    {
        let outputs = self.take_outputs();
        dispatch(&outputs, host)
    }

    /// Everything pending, including events the last `update` already returned.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    #[inline]
    pub fn take_outputs(&mut self) -> Outputs {
        self.returned = 0;
        std::mem::take(&mut self.outputs)
    }

    #[inline]
    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn current_state_name(&self) -> &str {
        self.graph
            .state(self.current)
            .map(|s| s.name.as_str())
            .unwrap_or_default()
    }

    fn current_clip(&self) -> Option<&Clip> {
        self.graph.clip(self.playback.clip())
    }

    /// Index of the frame on screen.
    #[inline]
    pub fn current_frame(&self) -> usize {
        self.playback.shown_frame()
    }

    pub fn current_frame_ref(&self) -> Option<&FrameRef> {
        self.current_clip()?.frames.get(self.playback.shown_frame())
    }

    /// True once a non-looping clip has run past its last frame.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.playback.is_finished()
    }

    /// Current value of a registered parameter.
    pub fn parameter(&self, name: &str) -> Option<ParameterValue> {
        let id = self.registry.get(name)?;
        self.graph.parameter(id).map(|p| p.value)
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Negative or non-finite speeds pause playback.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = sanitize_speed(speed);
    }

    #[inline]
    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
