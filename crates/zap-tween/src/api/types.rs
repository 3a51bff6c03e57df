use std::sync::atomic::{AtomicU32, Ordering};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Identity of one `TweenProcessor` instance.
/// Id 0 is never handed out, so handles carrying it are always stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessorId(pub(crate) u32);

static NEXT_PROCESSOR_ID: AtomicU32 = AtomicU32::new(1);

impl ProcessorId {
    pub const NONE: ProcessorId = ProcessorId(0);

    pub(crate) fn next() -> Self {
        ProcessorId(NEXT_PROCESSOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Opaque identity of the thing a tween animates.
/// The processor never reads it; callers use it to de-duplicate tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetKey {
    /// Owner of the animated value, e.g. an entity id.
    pub owner: u64,
    /// Which property of the owner is animated.
    pub channel: u32,
}

impl TargetKey {
    pub const fn new(owner: u64, channel: u32) -> Self {
        Self { owner, channel }
    }
}

/// Versioned reference to a tween slot.
///
/// A handle is a plain value: copying it is free and it never owns the slot.
/// It stays valid while the slot at `id` is active and still carries `version`;
/// once the tween retires, or the slot is reused by a newer tween, every
/// operation through the handle becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenHandle {
    id: u32,
    version: u32,
    processor: ProcessorId,
}

impl TweenHandle {
    /// The handle returned by a rejected create. Never valid.
    pub const INVALID: TweenHandle = TweenHandle {
        id: u32::MAX,
        version: 0,
        processor: ProcessorId::NONE,
    };

    pub(crate) fn new(id: u32, version: u32, processor: ProcessorId) -> Self {
        Self { id, version, processor }
    }

    /// Slot index this handle points at.
    pub fn id(self) -> u32 {
        self.id
    }

    /// Slot generation this handle was minted for.
    pub fn version(self) -> u32 {
        self.version
    }

    /// The processor that issued this handle.
    pub fn processor(self) -> ProcessorId {
        self.processor
    }
}

impl Default for TweenHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_ids_are_unique_and_nonzero() {
        let a = ProcessorId::next();
        let b = ProcessorId::next();
        assert_ne!(a, b);
        assert_ne!(a, ProcessorId::NONE);
        assert_ne!(b, ProcessorId::NONE);
    }

    #[test]
    fn default_handle_is_invalid() {
        let h = TweenHandle::default();
        assert_eq!(h, TweenHandle::INVALID);
        assert_eq!(h.version(), 0);
        assert_eq!(h.processor(), ProcessorId::NONE);
    }
}
