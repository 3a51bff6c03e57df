// extensions/mod.rs
//
// Optional pieces layered on the core processor: the easing catalog and
// targets that drive Entity properties. The processor only sees them
// through `Ease` and `TweenTarget`.

pub mod easing;
pub mod targets;

pub use easing::{Ease, EaseFn, Easing, lerp, lerp_vec2, lerp_vec4, ease, ease_vec2};
pub use targets::{EntityProperty, EntityTween};
