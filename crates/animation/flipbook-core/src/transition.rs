//! Guarded edges between states.

use serde::{Deserialize, Serialize};

use crate::ids::{ParamId, StateId};
use crate::parameter::{Parameter, ParameterValue};

/// Edge from the owning state to `target`, guarded by a parameter condition.
/// A transition without a parameter never fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(default)]
    pub parameter: Option<ParamId>,
    pub target: StateId,
    /// Compared against `Bool` parameters; ignored for triggers.
    #[serde(default)]
    pub bool_condition: bool,
}

impl Transition {
    pub fn on_bool(parameter: ParamId, condition: bool, target: StateId) -> Self {
        Self {
            parameter: Some(parameter),
            target,
            bool_condition: condition,
        }
    }

    pub fn on_trigger(parameter: ParamId, target: StateId) -> Self {
        Self {
            parameter: Some(parameter),
            target,
            bool_condition: false,
        }
    }

    pub fn inert(target: StateId) -> Self {
        Self {
            parameter: None,
            target,
            bool_condition: false,
        }
    }

    /// Evaluate the guard against the parameter arena.
    pub fn is_satisfied(&self, parameters: &[Parameter]) -> bool {
        let Some(param) = self.parameter.and_then(|id| parameters.get(id.index())) else {
            return false;
        };
        match param.value {
            ParameterValue::Bool(v) => v == self.bool_condition,
            ParameterValue::Trigger(v) => v,
        }
    }
}
