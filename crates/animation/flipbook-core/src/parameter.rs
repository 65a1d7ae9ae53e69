//! Named transition inputs.

use serde::{Deserialize, Serialize};

/// Parameter variants. `Trigger` is reset to `false` by the controller right after the
/// transition pass that observed it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParameterValue {
    Bool(bool),
    Trigger(bool),
}

impl ParameterValue {
    #[inline]
    pub fn is_trigger(self) -> bool {
        matches!(self, ParameterValue::Trigger(_))
    }

    /// Same variant carrying `value`.
    #[inline]
    pub fn with_value(self, value: bool) -> Self {
        match self {
            ParameterValue::Bool(_) => ParameterValue::Bool(value),
            ParameterValue::Trigger(_) => ParameterValue::Trigger(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,
}

impl Parameter {
    pub fn bool(name: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            value: ParameterValue::Bool(value),
        }
    }

    pub fn trigger(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: ParameterValue::Trigger(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Parameter::bool("grounded", true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "grounded",
                "value": { "kind": "bool", "value": true }
            })
        );
    }

    #[test]
    fn triggers_start_unset() {
        let p = Parameter::trigger("jump");
        assert!(p.value.is_trigger());
        assert_eq!(p.value, ParameterValue::Trigger(false));
        assert_eq!(p.value.with_value(true), ParameterValue::Trigger(true));
        assert!(!Parameter::bool("moving", true).value.is_trigger());
    }
}
