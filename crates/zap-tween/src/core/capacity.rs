// core/capacity.rs
//
// Growth policies for the tween slot pool.
// A policy maps the current capacity to the next one; any answer that is
// not larger than the current capacity means "do not grow".

use serde::{Deserialize, Serialize};

/// Decides how far the slot pool grows when it runs out of free slots.
pub trait CapacityPolicy {
    /// Return the new capacity. Values `<= current` refuse growth.
    fn grow(&self, current: usize) -> usize;
}

impl<F: Fn(usize) -> usize> CapacityPolicy for F {
    fn grow(&self, current: usize) -> usize {
        self(current)
    }
}

/// Built-in growth strategies, selectable from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrowthStrategy {
    /// Double the pool each time it fills.
    #[default]
    Doubling,
    /// Never grow; creates fail once the pool is full.
    Fixed,
    /// Add `step` slots each time.
    Linear { step: usize },
    /// Double, but never beyond `max` slots.
    Capped { max: usize },
}

impl CapacityPolicy for GrowthStrategy {
    fn grow(&self, current: usize) -> usize {
        match *self {
            GrowthStrategy::Doubling => current.saturating_mul(2).max(1),
            GrowthStrategy::Fixed => current,
            GrowthStrategy::Linear { step } => current.saturating_add(step),
            GrowthStrategy::Capped { max } => current.saturating_mul(2).max(1).min(max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_doubles() {
        assert_eq!(GrowthStrategy::Doubling.grow(4), 8);
        assert_eq!(GrowthStrategy::Doubling.grow(0), 1);
    }

    #[test]
    fn fixed_refuses() {
        assert!(GrowthStrategy::Fixed.grow(16) <= 16);
    }

    #[test]
    fn linear_adds_step() {
        assert_eq!(GrowthStrategy::Linear { step: 10 }.grow(5), 15);
        // A zero step is a refusal, not an error.
        assert_eq!(GrowthStrategy::Linear { step: 0 }.grow(5), 5);
    }

    #[test]
    fn capped_stops_at_max() {
        let capped = GrowthStrategy::Capped { max: 12 };
        assert_eq!(capped.grow(4), 8);
        assert_eq!(capped.grow(8), 12);
        assert_eq!(capped.grow(12), 12);
    }

    #[test]
    fn closures_are_policies() {
        let triple = |c: usize| c * 3;
        assert_eq!(triple.grow(2), 6);
    }

    #[test]
    fn strategy_from_json() {
        let s: GrowthStrategy = serde_json::from_str(r#"{ "kind": "linear", "step": 32 }"#).unwrap();
        assert_eq!(s, GrowthStrategy::Linear { step: 32 });
        let s: GrowthStrategy = serde_json::from_str(r#"{ "kind": "fixed" }"#).unwrap();
        assert_eq!(s, GrowthStrategy::Fixed);
    }
}
