/// Why a tween could not be created.
///
/// Rejection is an ordinary outcome on the hot path, never a fault:
/// `TweenProcessor::create` folds every variant into `TweenHandle::INVALID`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateError {
    /// The target reported itself dead at creation time.
    #[error("tween target is not alive")]
    DeadTarget,

    /// The pool is full and the capacity policy refused to grow it.
    #[error("tween pool exhausted at capacity {capacity}")]
    CapacityExhausted { capacity: usize },

    /// The processor was disposed and holds no storage.
    #[error("tween processor has been disposed")]
    Disposed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_reason() {
        assert_eq!(CreateError::DeadTarget.to_string(), "tween target is not alive");
        assert_eq!(
            CreateError::CapacityExhausted { capacity: 8 }.to_string(),
            "tween pool exhausted at capacity 8"
        );
    }
}
