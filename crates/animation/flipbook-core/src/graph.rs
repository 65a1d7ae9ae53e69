//! Authoring container for clips, parameters and states.
//!
//! `StateGraph` owns every entity in flat arenas and hands out ids. Transitions refer to
//! parameters by [`ParamId`], so several transitions (in the same or different states) can
//! share one parameter instance. Names are labels only; lookups by name are a convenience.

use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::error::{FlipbookError, Result};
use crate::ids::{ClipId, ParamId, StateId};
use crate::parameter::Parameter;
use crate::state::State;
use crate::transition::Transition;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateGraph {
    clips: Vec<Clip>,
    parameters: Vec<Parameter>,
    states: Vec<State>,
    default_state: Option<StateId>,
}

impl StateGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_clip(&mut self, clip: Clip) -> ClipId {
        self.clips.push(clip);
        ClipId::from_index(self.clips.len() - 1)
    }

    pub fn add_parameter(&mut self, parameter: Parameter) -> ParamId {
        self.parameters.push(parameter);
        ParamId::from_index(self.parameters.len() - 1)
    }

    /// Add a state playing `clip`. The first state added becomes the default unless
    /// [`set_default_state`](Self::set_default_state) picks another.
    pub fn add_state(&mut self, name: &str, clip: ClipId) -> StateId {
        self.states.push(State::new(name, clip));
        let id = StateId::from_index(self.states.len() - 1);
        if self.default_state.is_none() {
            self.default_state = Some(id);
        }
        id
    }

    /// Append a transition to `from`'s list; earlier transitions take priority.
    pub fn add_transition(&mut self, from: StateId, transition: Transition) -> Result<()> {
        let state = self
            .states
            .get_mut(from.index())
            .ok_or_else(|| FlipbookError::StateNotFound {
                state: format!("{from:?}"),
            })?;
        state.transitions.push(transition);
        Ok(())
    }

    pub fn set_default_state(&mut self, state: StateId) {
        self.default_state = Some(state);
    }

    pub fn default_state(&self) -> Option<StateId> {
        self.default_state
    }

    pub fn clip(&self, id: ClipId) -> Option<&Clip> {
        self.clips.get(id.index())
    }

    pub fn parameter(&self, id: ParamId) -> Option<&Parameter> {
        self.parameters.get(id.index())
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    /// First state carrying `name`.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(StateId::from_index)
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub(crate) fn parameters_mut(&mut self) -> &mut [Parameter] {
        &mut self.parameters
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId::from_index(i), s))
    }

    /// Check every reference and clip so that entering any state cannot fail later.
    pub fn validate(&self) -> Result<()> {
        for clip in &self.clips {
            clip.validate()?;
        }
        for state in &self.states {
            if self.clip(state.clip).is_none() {
                return Err(FlipbookError::UnknownClip {
                    state: state.name.clone(),
                    clip: state.clip,
                });
            }
            for t in &state.transitions {
                if self.state(t.target).is_none() {
                    return Err(FlipbookError::UnknownTargetState {
                        state: state.name.clone(),
                        target: t.target,
                    });
                }
                if let Some(p) = t.parameter {
                    if self.parameter(p).is_none() {
                        return Err(FlipbookError::UnknownParameter {
                            state: state.name.clone(),
                            parameter: p,
                        });
                    }
                }
            }
        }
        match self.default_state {
            None => Err(FlipbookError::MissingDefaultState),
            Some(id) if self.state(id).is_none() => Err(FlipbookError::StateNotFound {
                state: format!("{id:?}"),
            }),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_state_becomes_default() {
        let mut g = StateGraph::new();
        let clip = g.add_clip(Clip::new("c", ["f0"], 10.0));
        let a = g.add_state("a", clip);
        let b = g.add_state("b", clip);
        assert_eq!(g.default_state(), Some(a));
        g.set_default_state(b);
        assert_eq!(g.default_state(), Some(b));
        assert_eq!(g.state_by_name("b"), Some(b));
        assert_eq!(g.state_by_name("zzz"), None);
    }

    #[test]
    fn validate_catches_dangling_references() {
        let mut g = StateGraph::new();
        let clip = g.add_clip(Clip::new("c", ["f0"], 10.0));
        let a = g.add_state("a", clip);
        g.add_transition(a, Transition::inert(StateId(9))).unwrap();
        assert_eq!(
            g.validate(),
            Err(FlipbookError::UnknownTargetState {
                state: "a".into(),
                target: StateId(9),
            })
        );

        let mut g = StateGraph::new();
        let clip = g.add_clip(Clip::new("c", ["f0"], 10.0));
        let a = g.add_state("a", clip);
        g.add_transition(a, Transition::on_trigger(ParamId(0), a))
            .unwrap();
        assert!(matches!(
            g.validate(),
            Err(FlipbookError::UnknownParameter { .. })
        ));

        let mut g = StateGraph::new();
        g.add_state("orphan", ClipId(4));
        assert!(matches!(g.validate(), Err(FlipbookError::UnknownClip { .. })));
    }

    #[test]
    fn validate_requires_a_default_state() {
        let g = StateGraph::new();
        assert_eq!(g.validate(), Err(FlipbookError::MissingDefaultState));
    }

    #[test]
    fn add_transition_rejects_unknown_source() {
        let mut g = StateGraph::new();
        assert!(g
            .add_transition(StateId(0), Transition::inert(StateId(0)))
            .is_err());
    }
}
