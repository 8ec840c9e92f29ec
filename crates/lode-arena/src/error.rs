//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena and scratch-pool operations.
///
/// Every failing operation reports through one of these variants and
/// leaves the arena's cursors exactly as they were before the call.
/// Nothing is retried internally and nothing aborts the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Virtual address space for the reservation could not be obtained.
    ReserveFailed {
        /// Number of bytes the reservation asked for (page-rounded).
        size: usize,
    },
    /// Physical backing could not be granted, e.g. under memory pressure.
    CommitFailed {
        /// Offset of the failed commit range within the reservation.
        offset: usize,
        /// Number of bytes the commit asked for.
        size: usize,
    },
    /// The allocation would exceed the arena's fixed reserved span.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes left between the aligned cursor and the end of the span.
        available: usize,
    },
    /// Every scratch slot is either in use or conflicts with the caller.
    ScratchExhausted {
        /// Number of slots the pool was created with.
        slots: usize,
    },
    /// A configuration value was rejected at construction time.
    InvalidConfig {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReserveFailed { size } => {
                write!(f, "failed to reserve {size} bytes of address space")
            }
            Self::CommitFailed { offset, size } => {
                write!(
                    f,
                    "failed to commit {size} bytes at offset {offset} of the reservation"
                )
            }
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {available} bytes available"
                )
            }
            Self::ScratchExhausted { slots } => {
                write!(f, "no scratch slot available: all {slots} slots in use or conflicting")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena configuration: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_the_numbers() {
        let err = ArenaError::CapacityExceeded {
            requested: 4096,
            available: 128,
        };
        let msg = err.to_string();
        assert!(msg.contains("4096"));
        assert!(msg.contains("128"));
    }

    #[test]
    fn error_trait_is_object_safe() {
        let err: Box<dyn Error> = Box::new(ArenaError::ScratchExhausted { slots: 2 });
        assert!(err.to_string().contains("2 slots"));
    }
}
