pub mod api;
pub mod core;
pub mod components;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::TweenConfig;
pub use api::error::CreateError;
pub use api::types::{EntityId, ProcessorId, TargetKey, TweenHandle};
pub use components::entity::Entity;
pub use crate::core::capacity::{CapacityPolicy, GrowthStrategy};
pub use crate::core::processor::{Tween, TweenProcessor, DEFAULT_MIN_DURATION};
pub use crate::core::scene::Scene;
pub use crate::core::slot::CompleteFn;
pub use crate::core::target::TweenTarget;
pub use crate::core::time::{FixedDelta, Stopwatch, TimeSource};

// Extensions: easing catalog and built-in entity targets
pub use extensions::{
    Ease, EaseFn, Easing, lerp, lerp_vec2, lerp_vec4, ease, ease_vec2,
    EntityProperty, EntityTween,
};
