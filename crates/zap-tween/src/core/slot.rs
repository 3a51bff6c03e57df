// core/slot.rs
//
// One pool-resident tween record. Slots live in a flat Vec owned by the
// processor and are mutated in place; a retired slot keeps only its version.

use crate::core::target::TweenTarget;
use crate::extensions::easing::{eval_ease, Ease};

/// Completion callback. Fires once, when the tween finishes gracefully.
pub type CompleteFn = Box<dyn FnOnce()>;

pub(crate) struct Slot<C> {
    pub(crate) active: bool,
    /// Bumped on every activation, never reset.
    pub(crate) version: u32,
    pub(crate) target: Option<Box<dyn TweenTarget<C>>>,
    pub(crate) elapsed: f32,
    pub(crate) duration: f32,
    pub(crate) ease: Option<Ease>,
    /// Keeps its allocation across generations.
    pub(crate) on_complete: Vec<CompleteFn>,
    pub(crate) event: Option<u32>,
    pub(crate) paused: bool,
}

impl<C> Slot<C> {
    pub(crate) fn vacant() -> Self {
        Self {
            active: false,
            version: 0,
            target: None,
            elapsed: 0.0,
            duration: 0.0,
            ease: None,
            on_complete: Vec::new(),
            event: None,
            paused: false,
        }
    }

    /// Whether a handle minted with `version` still refers to this slot.
    #[inline]
    pub(crate) fn matches(&self, version: u32) -> bool {
        self.active && self.version == version
    }

    #[inline]
    pub(crate) fn target_alive(&self, ctx: &C) -> bool {
        self.target.as_ref().is_some_and(|t| t.is_alive(ctx))
    }

    /// Normalized progress, unclamped.
    #[inline]
    pub(crate) fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// Push the target to its eased value for progress `p`.
    #[inline]
    pub(crate) fn apply_progress(&mut self, ctx: &mut C, p: f32) {
        let eased = eval_ease(self.ease, p);
        if let Some(target) = self.target.as_mut() {
            target.apply(ctx, eased);
        }
    }

    /// Land the target on its end value and fire completion callbacks.
    /// The completion event, if any, is queued into `events`.
    pub(crate) fn finish(&mut self, ctx: &mut C, events: &mut Vec<u32>) {
        if let Some(target) = self.target.as_mut() {
            target.apply(ctx, 1.0);
            target.complete_immediately(ctx);
        }
        for callback in self.on_complete.drain(..) {
            callback();
        }
        if let Some(event) = self.event.take() {
            events.push(event);
        }
    }

    /// Drop everything but the version. Unfired callbacks are discarded.
    pub(crate) fn clear(&mut self) {
        self.active = false;
        self.target = None;
        self.elapsed = 0.0;
        self.duration = 0.0;
        self.ease = None;
        self.on_complete.clear();
        self.event = None;
        self.paused = false;
    }
}
