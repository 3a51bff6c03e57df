use crate::api::types::TargetKey;

/// Something a tween can drive: a position, a rotation, a color, a plain value.
///
/// `C` is the context the target reads and writes (a `Scene`, or `()` when the
/// target owns its state). The processor calls these in a fixed order:
/// `capture_start` once when the tween is created, `apply` zero or more times
/// with eased progress, then `complete_immediately` at most once on a graceful
/// finish. `is_alive` is polled every tick.
pub trait TweenTarget<C = ()> {
    /// Record the value the tween starts from.
    fn capture_start(&mut self, ctx: &C);

    /// Write the value at eased progress `eased`. May fall outside [0, 1].
    fn apply(&mut self, ctx: &mut C, eased: f32);

    /// Snap to the end value.
    fn complete_immediately(&mut self, ctx: &mut C);

    /// Whether the animated object still exists.
    fn is_alive(&self, ctx: &C) -> bool;

    /// Identity of the animated property, for caller-side de-duplication.
    fn key(&self) -> TargetKey;
}
