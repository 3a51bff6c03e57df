// core/mod.rs
//
// The tween processor and the seams it consumes: targets, capacity
// policies and time sources. The scene is the default target context.

pub mod capacity;
pub mod processor;
pub mod scene;
pub(crate) mod slot;
pub mod target;
pub mod time;
