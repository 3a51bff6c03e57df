// core/processor.rs
//
// Tween processor: a slot pool with generational handles.
//
// Usage:
//   let mut tweens = TweenProcessor::new();
//   let h = tweens.create(&scene, Tween::new(EntityTween::position(id, to), 0.5)
//       .with_ease(Easing::QuadOut));
//   tweens.advance(dt, &mut scene);  // Advances all tweens, retires finished ones
//
// Slots sit in a flat Vec and are recycled through a free-index stack. The
// active-index list is dense and unordered; retiring a slot swap-removes its
// entry, so the tick loop re-examines the same cursor after every removal.
// Nothing allocates per tick once the pool has reached its working size.

use log::{debug, trace, warn};
use crate::api::config::TweenConfig;
use crate::api::error::CreateError;
use crate::api::types::{ProcessorId, TargetKey, TweenHandle};
use crate::core::capacity::CapacityPolicy;
use crate::core::slot::{CompleteFn, Slot};
use crate::core::target::TweenTarget;
use crate::core::time::{FixedDelta, TimeSource};
use crate::extensions::easing::Ease;

/// Floor for tween durations when the config gives no usable one.
pub const DEFAULT_MIN_DURATION: f32 = 1e-4;

/// Description of a tween to create.
pub struct Tween<C = ()> {
    target: Box<dyn TweenTarget<C>>,
    duration: f32,
    ease: Option<Ease>,
    on_complete: Option<CompleteFn>,
    event: Option<u32>,
    paused: bool,
}

impl<C> Tween<C> {
    /// Animate `target` over `duration` seconds, linearly unless eased.
    pub fn new(target: impl TweenTarget<C> + 'static, duration: f32) -> Self {
        Self::boxed(Box::new(target), duration)
    }

    /// Same as `new`, for targets that are already boxed.
    pub fn boxed(target: Box<dyn TweenTarget<C>>, duration: f32) -> Self {
        Self {
            target,
            duration,
            ease: None,
            on_complete: None,
            event: None,
            paused: false,
        }
    }

    // -- Builder methods --

    pub fn with_ease(mut self, ease: impl Into<Ease>) -> Self {
        self.ease = Some(ease.into());
        self
    }

    /// Run `callback` when the tween finishes. Not called on stop or target death.
    /// The callback runs inside `tick`; calling back into the same processor
    /// from it (e.g. through a `RefCell`) panics on the borrow.
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Queue `event_id` for `drain_completed` when the tween finishes.
    pub fn with_event(mut self, event_id: u32) -> Self {
        self.event = Some(event_id);
        self
    }

    /// Create the tween already paused.
    pub fn paused(mut self) -> Self {
        self.paused = true;
        self
    }
}

/// Owns every tween slot and advances them once per tick.
pub struct TweenProcessor<C = ()> {
    id: ProcessorId,
    slots: Vec<Slot<C>>,
    /// Stack of inactive slot indices; popped from the back.
    free: Vec<usize>,
    /// Dense, unordered list of active slot indices.
    active: Vec<usize>,
    policy: Box<dyn CapacityPolicy>,
    time: Box<dyn TimeSource>,
    min_duration: f32,
    default_ease: Option<Ease>,
    expansions: u32,
    /// Reserved to pool capacity; hosts drain it every frame.
    completed_events: Vec<u32>,
    disposed: bool,
}

impl<C> TweenProcessor<C> {
    pub fn new() -> Self {
        Self::with_config(TweenConfig::default())
    }

    /// Create a processor with `capacity` slots and default settings otherwise.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TweenConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: TweenConfig) -> Self {
        let capacity = config.initial_capacity.clamp(1, u32::MAX as usize);
        let min_duration = if config.min_duration > 0.0 {
            config.min_duration
        } else {
            DEFAULT_MIN_DURATION
        };

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::vacant);
        // Highest index first, so index 0 is handed out first.
        let free: Vec<usize> = (0..capacity).rev().collect();

        Self {
            id: ProcessorId::next(),
            slots,
            free,
            active: Vec::with_capacity(capacity),
            policy: Box::new(config.growth),
            time: Box::new(FixedDelta::new(config.fixed_dt)),
            min_duration,
            default_ease: config.default_easing.map(Ease::Curve),
            expansions: 0,
            completed_events: Vec::with_capacity(capacity),
            disposed: false,
        }
    }

    /// Replace the capacity policy from the config.
    pub fn with_policy(mut self, policy: impl CapacityPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the time source used by `tick`.
    pub fn with_time_source(mut self, time: impl TimeSource + 'static) -> Self {
        self.time = Box::new(time);
        self
    }

    // -- Allocation --

    /// Start a tween. Returns `TweenHandle::INVALID` if the target is dead,
    /// the pool cannot grow, or the processor was disposed.
    pub fn create(&mut self, ctx: &C, tween: Tween<C>) -> TweenHandle {
        match self.try_create(ctx, tween) {
            Ok(handle) => handle,
            Err(err) => {
                trace!("tween rejected: {}", err);
                TweenHandle::INVALID
            }
        }
    }

    /// Start a tween, reporting why it was rejected. A rejection leaves the
    /// processor untouched.
    pub fn try_create(&mut self, ctx: &C, tween: Tween<C>) -> Result<TweenHandle, CreateError> {
        if self.disposed {
            return Err(CreateError::Disposed);
        }
        if !tween.target.is_alive(ctx) {
            return Err(CreateError::DeadTarget);
        }

        let index = self.allocate()?;
        let Tween { mut target, duration, ease, on_complete, event, paused } = tween;

        let slot = &mut self.slots[index];
        slot.active = true;
        slot.version = slot.version.wrapping_add(1);
        slot.elapsed = 0.0;
        // `max` also maps a NaN duration to the floor.
        slot.duration = duration.max(self.min_duration);
        slot.ease = ease.or(self.default_ease);
        slot.paused = paused;
        slot.event = event;
        slot.on_complete.extend(on_complete);
        target.capture_start(ctx);
        slot.target = Some(target);

        self.active.push(index);
        Ok(TweenHandle::new(index as u32, slot.version, self.id))
    }

    /// Pop a free index, growing the pool if the policy allows.
    fn allocate(&mut self) -> Result<usize, CreateError> {
        if let Some(index) = self.free.pop() {
            return Ok(index);
        }

        let current = self.slots.len();
        let next = self.policy.grow(current).min(u32::MAX as usize);
        if next <= current {
            warn!("tween pool full at {} slots and policy refused to grow", current);
            return Err(CreateError::CapacityExhausted { capacity: current });
        }

        self.slots.resize_with(next, Slot::vacant);
        self.active.reserve_exact(next - self.active.len());
        self.free.reserve_exact(next - current);
        self.completed_events.reserve(next);
        self.free.extend((current..next).rev());
        self.expansions += 1;
        debug!("tween pool grew {} -> {} slots", current, next);

        self.free
            .pop()
            .ok_or(CreateError::CapacityExhausted { capacity: current })
    }

    // -- Tick --

    /// Advance every tween by the time source's delta.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, ctx: &mut C) -> usize {
        let dt = self.time.delta();
        self.advance(dt, ctx)
    }

    /// Advance every tween by `dt` seconds and apply the eased values.
    /// Finished tweens land on their end value, fire their callbacks and
    /// retire; tweens whose target died retire silently. A `dt` that is not
    /// positive does nothing. Returns the number of tweens that completed.
    pub fn advance(&mut self, dt: f32, ctx: &mut C) -> usize {
        // Also rejects NaN.
        if !(dt > 0.0) || self.active.is_empty() {
            return 0;
        }

        let mut completed = 0;
        let mut cursor = 0;
        // The active list shrinks during the scan; re-read its length each pass.
        while cursor < self.active.len() {
            let slot = &mut self.slots[self.active[cursor]];

            if !slot.active || !slot.target_alive(ctx) {
                self.remove_at(cursor);
                continue;
            }
            if slot.paused {
                cursor += 1;
                continue;
            }

            slot.elapsed += dt;
            let p = slot.progress();
            if p < 1.0 {
                slot.apply_progress(ctx, p);
                cursor += 1;
            } else {
                slot.finish(ctx, &mut self.completed_events);
                completed += 1;
                self.remove_at(cursor);
            }
        }
        completed
    }

    /// Retire the slot at `cursor` of the active list. The last active index
    /// takes its place, so the caller must not advance the cursor.
    fn remove_at(&mut self, cursor: usize) {
        let index = self.active.swap_remove(cursor);
        self.slots[index].clear();
        self.free.push(index);
    }

    /// Retire a slot found by handle rather than by cursor.
    fn retire(&mut self, index: usize) {
        if let Some(pos) = self.active.iter().position(|&i| i == index) {
            self.active.swap_remove(pos);
        }
        self.slots[index].clear();
        self.free.push(index);
    }

    // -- Handle operations --

    /// Slot index for `handle`, if it still refers to a live tween of this processor.
    fn resolve(&self, handle: TweenHandle) -> Option<usize> {
        if handle.processor() != self.id {
            return None;
        }
        let index = handle.id() as usize;
        self.slots
            .get(index)
            .filter(|slot| slot.matches(handle.version()))
            .map(|_| index)
    }

    pub fn is_valid(&self, handle: TweenHandle) -> bool {
        self.resolve(handle).is_some()
    }

    /// Add a completion callback. If the handle is already stale the
    /// callback runs immediately instead.
    pub fn on_complete(&mut self, handle: TweenHandle, callback: impl FnOnce() + 'static) {
        match self.resolve(handle) {
            Some(index) => self.slots[index].on_complete.push(Box::new(callback)),
            None => callback(),
        }
    }

    pub fn pause(&mut self, handle: TweenHandle) {
        self.set_paused(handle, true);
    }

    pub fn resume(&mut self, handle: TweenHandle) {
        self.set_paused(handle, false);
    }

    pub fn set_paused(&mut self, handle: TweenHandle, paused: bool) {
        if let Some(index) = self.resolve(handle) {
            self.slots[index].paused = paused;
        }
    }

    /// Retire a tween without touching its target or firing callbacks.
    /// Returns false if the handle was stale.
    pub fn stop(&mut self, handle: TweenHandle) -> bool {
        match self.resolve(handle) {
            Some(index) => {
                self.retire(index);
                true
            }
            None => false,
        }
    }

    /// Retire a tween, first snapping its target to the end value and firing
    /// its callbacks. A dead target is retired without completion.
    pub fn stop_and_complete(&mut self, handle: TweenHandle, ctx: &mut C) -> bool {
        let Some(index) = self.resolve(handle) else {
            return false;
        };
        let slot = &mut self.slots[index];
        if slot.target_alive(ctx) {
            if let Some(target) = slot.target.as_mut() {
                target.complete_immediately(ctx);
            }
            for callback in slot.on_complete.drain(..) {
                callback();
            }
            if let Some(event) = slot.event.take() {
                self.completed_events.push(event);
            }
        }
        self.retire(index);
        true
    }

    // -- Bulk operations --

    pub fn pause_all(&mut self) {
        self.set_all_paused(true);
    }

    pub fn resume_all(&mut self) {
        self.set_all_paused(false);
    }

    fn set_all_paused(&mut self, paused: bool) {
        for &index in &self.active {
            self.slots[index].paused = paused;
        }
    }

    /// Retire every tween whose target is gone, without completion.
    /// Returns how many were retired.
    pub fn cull_invalid_targets(&mut self, ctx: &C) -> usize {
        let mut culled = 0;
        let mut cursor = 0;
        while cursor < self.active.len() {
            let slot = &self.slots[self.active[cursor]];
            if slot.active && slot.target_alive(ctx) {
                cursor += 1;
            } else {
                self.remove_at(cursor);
                culled += 1;
            }
        }
        culled
    }

    /// Tear down every tween and release the pool. No target is completed and
    /// no callback fires. Later creates are rejected with `CreateError::Disposed`.
    pub fn dispose(&mut self) {
        for &index in &self.active {
            self.slots[index].clear();
        }
        debug!("tween processor disposed with {} active tweens", self.active.len());
        self.active = Vec::new();
        self.free = Vec::new();
        self.slots = Vec::new();
        self.completed_events = Vec::new();
        self.disposed = true;
    }

    /// Drain completion events queued by tweens created `with_event`.
    /// Call once per frame: the queue holds one pool's worth of events without
    /// reallocating, and keeps growing if it is never drained.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = u32> + '_ {
        self.completed_events.drain(..)
    }

    // -- Observers --

    /// Number of live tweens.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether there are no live tweens.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Total slots in the pool.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots available without growing.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// How many times the pool has grown.
    pub fn expansion_count(&self) -> u32 {
        self.expansions
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn id(&self) -> ProcessorId {
        self.id
    }

    /// Slot indices of the live tweens, in no particular order.
    pub fn active_indices(&self) -> &[usize] {
        &self.active
    }

    /// Handles to every live tween.
    pub fn active_handles(&self) -> impl Iterator<Item = TweenHandle> + '_ {
        self.active
            .iter()
            .map(|&index| TweenHandle::new(index as u32, self.slots[index].version, self.id))
    }

    pub fn is_paused(&self, handle: TweenHandle) -> Option<bool> {
        self.resolve(handle).map(|index| self.slots[index].paused)
    }

    /// Seconds the tween has run, excluding paused ticks.
    pub fn elapsed(&self, handle: TweenHandle) -> Option<f32> {
        self.resolve(handle).map(|index| self.slots[index].elapsed)
    }

    /// Duration after clamping to the minimum.
    pub fn duration(&self, handle: TweenHandle) -> Option<f32> {
        self.resolve(handle).map(|index| self.slots[index].duration)
    }

    /// Normalized progress in [0, 1).
    pub fn progress(&self, handle: TweenHandle) -> Option<f32> {
        self.resolve(handle).map(|index| self.slots[index].progress())
    }

    pub fn key(&self, handle: TweenHandle) -> Option<TargetKey> {
        self.resolve(handle)
            .and_then(|index| self.slots[index].target.as_ref())
            .map(|target| target.key())
    }

    /// Live tween driving the property identified by `key`, if any.
    pub fn find_by_key(&self, key: TargetKey) -> Option<TweenHandle> {
        self.active_handles().find(|&h| self.key(h) == Some(key))
    }
}

impl<C> Default for TweenProcessor<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for TweenProcessor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenProcessor")
            .field("id", &self.id)
            .field("capacity", &self.slots.len())
            .field("active", &self.active.len())
            .field("free", &self.free.len())
            .field("expansions", &self.expansions)
            .field("disposed", &self.disposed)
            .finish()
    }
}

// Handle-side API. Each call validates the handle's generation first.
impl TweenHandle {
    /// See `TweenProcessor::on_complete`.
    pub fn on_complete<C>(self, tweens: &mut TweenProcessor<C>, callback: impl FnOnce() + 'static) {
        tweens.on_complete(self, callback);
    }

    pub fn pause<C>(self, tweens: &mut TweenProcessor<C>) {
        tweens.pause(self);
    }

    pub fn resume<C>(self, tweens: &mut TweenProcessor<C>) {
        tweens.resume(self);
    }

    pub fn stop<C>(self, tweens: &mut TweenProcessor<C>) -> bool {
        tweens.stop(self)
    }

    pub fn stop_and_complete<C>(self, tweens: &mut TweenProcessor<C>, ctx: &mut C) -> bool {
        tweens.stop_and_complete(self, ctx)
    }

    pub fn is_active<C>(self, tweens: &TweenProcessor<C>) -> bool {
        tweens.is_valid(self)
    }
}
