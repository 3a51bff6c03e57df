// api/mod.rs
//
// Public types shared by every part of the tween system:
// handles and ids, configuration, and creation errors.

pub mod config;
pub mod error;
pub mod types;
