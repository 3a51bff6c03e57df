use serde::{Deserialize, Serialize};
use crate::core::capacity::GrowthStrategy;
use crate::extensions::easing::Easing;

/// Configuration for a `TweenProcessor`.
/// Every field has a default, so a JSON config only names what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Slots allocated up front (default: 64, minimum 1).
    pub initial_capacity: usize,
    /// How the pool grows once every slot is in use (default: doubling).
    pub growth: GrowthStrategy,
    /// Delta returned by the default time source, in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Durations shorter than this are raised to it, in seconds (default: 1e-4).
    pub min_duration: f32,
    /// Curve used when a tween does not name one. `None` means linear.
    pub default_easing: Option<Easing>,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            growth: GrowthStrategy::Doubling,
            fixed_dt: 1.0 / 60.0,
            min_duration: 1e-4,
            default_easing: None,
        }
    }
}

impl TweenConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_growth(mut self, growth: GrowthStrategy) -> Self {
        self.growth = growth;
        self
    }

    pub fn with_fixed_dt(mut self, dt: f32) -> Self {
        self.fixed_dt = dt;
        self
    }

    pub fn with_min_duration(mut self, min_duration: f32) -> Self {
        self.min_duration = min_duration;
        self
    }

    pub fn with_default_easing(mut self, easing: Easing) -> Self {
        self.default_easing = Some(easing);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "initial_capacity": 8,
            "growth": { "kind": "capped", "max": 32 },
            "default_easing": "quad_out"
        }"#;
        let config = TweenConfig::from_json(json).unwrap();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.growth, GrowthStrategy::Capped { max: 32 });
        assert_eq!(config.default_easing, Some(Easing::QuadOut));
        assert_eq!(config.fixed_dt, TweenConfig::default().fixed_dt);
    }

    #[test]
    fn empty_json_is_default() {
        let config = TweenConfig::from_json("{}").unwrap();
        assert_eq!(config, TweenConfig::default());
    }

    #[test]
    fn unknown_easing_is_an_error() {
        assert!(TweenConfig::from_json(r#"{ "default_easing": "wobble" }"#).is_err());
    }
}
