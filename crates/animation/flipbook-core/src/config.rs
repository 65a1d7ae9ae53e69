//! Core configuration for flipbook-core.

use serde::{Deserialize, Serialize};

/// Configuration for controller stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on frame steps taken by a single `update`; leftover time is dropped.
    pub max_steps_per_update: u32,
    /// Initial playback speed multiplier applied to `dt`.
    pub speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps_per_update: 64,
            speed: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "speed": 2.0 }"#).unwrap();
        assert_eq!(cfg.speed, 2.0);
        assert_eq!(cfg.max_steps_per_update, 64);
    }
}
