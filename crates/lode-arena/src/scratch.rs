//! Per-context scratch arena pools for transient allocations.
//!
//! A [`ScratchPool`] owns a small, fixed set of lazily created arenas
//! and hands them out one checkpoint at a time. Callers doing transient
//! work pass the arenas they must not alias — typically the destination
//! arena they are writing results into — and receive a [`Scratch`]
//! guard over some other arena; dropping the guard rewinds the slot to
//! its pre-acquire position, so scratch space costs nothing across uses.
//!
//! Pools are execution-context-local: create one per worker or thread
//! and drop it with the context (dropping releases every slot arena —
//! there is no global singleton to leak). The pool never blocks and
//! never grows; when every slot is in use or conflicting, [`acquire`]
//! reports [`ArenaError::ScratchExhausted`] and the caller decides
//! whether to fall back or fail.
//!
//! [`acquire`]: ScratchPool::acquire

use core::cell::{RefCell, RefMut};
use core::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use crate::arena::Arena;
use crate::config::ScratchConfig;
use crate::error::ArenaError;

/// One pool slot: an arena created on first selection.
type Slot = RefCell<Option<Arena>>;

/// A fixed-size pool of scratch arenas scoped to one execution context.
///
/// Slot arenas are created lazily with the pool's [`ScratchConfig`] and
/// live until the pool is dropped. Selection is first-fit in slot
/// order; a slot is skipped if its guard is still live or if its arena
/// is identical (by reservation base, see [`Arena::ptr_eq`]) to any
/// arena in the caller's conflict list.
///
/// `RefCell` occupancy doubles as the in-use check, so an overlapping
/// request can never be handed an arena that is already out — the
/// aliasing hazard surfaces as `ScratchExhausted` instead.
pub struct ScratchPool {
    slots: SmallVec<[Slot; ScratchConfig::DEFAULT_SLOTS]>,
    config: ScratchConfig,
}

impl ScratchPool {
    /// Create a pool from a validated config. No arenas are created yet.
    pub fn new(config: ScratchConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut slots = SmallVec::with_capacity(config.slots);
        for _ in 0..config.slots {
            slots.push(RefCell::new(None));
        }
        Ok(Self { slots, config })
    }

    /// Acquire a checkpoint-scoped scratch arena.
    ///
    /// Scans slots in fixed order and returns the first that is neither
    /// in use nor in `conflicts`. A never-used slot has no identity to
    /// conflict with; its arena is created here, and a creation failure
    /// ([`ArenaError::ReserveFailed`] / [`ArenaError::CommitFailed`])
    /// propagates to the caller.
    ///
    /// Callers that hold a destination arena must pass it in
    /// `conflicts`, per the reference protocol; in this crate the
    /// occupancy check already rules out handing the same slot out
    /// twice, so the conflict list is what protects against arenas
    /// reachable outside this pool.
    pub fn acquire(&self, conflicts: &[&Arena]) -> Result<Scratch<'_>, ArenaError> {
        for slot in &self.slots {
            // A slot whose guard is still live is mid-use; skip it.
            let Ok(mut guard) = slot.try_borrow_mut() else {
                continue;
            };

            match guard.as_ref() {
                Some(arena) => {
                    if conflicts.iter().any(|&c| arena.ptr_eq(c)) {
                        continue;
                    }
                }
                None => {
                    *guard = Some(Arena::new(self.config.arena.clone())?);
                }
            }

            let start = guard
                .as_ref()
                .expect("slot arena exists: either present or just created")
                .pos();
            let arena = RefMut::map(guard, |slot| {
                slot.as_mut()
                    .expect("slot arena exists: either present or just created")
            });
            return Ok(Scratch { arena, start });
        }

        Err(ArenaError::ScratchExhausted {
            slots: self.slots.len(),
        })
    }

    /// Number of slots the pool was created with.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots whose arena has been created.
    ///
    /// A slot that is currently handed out counts as created.
    pub fn created_slots(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| match slot.try_borrow() {
                Ok(guard) => guard.is_some(),
                Err(_) => true,
            })
            .count()
    }
}

/// A live scratch acquisition: an arena plus the position to rewind to.
///
/// Derefs to [`Arena`] for allocation. Dropping the guard rewinds the
/// slot arena to its pre-acquire cursor and returns the slot to the
/// pool — the `release` half of the protocol.
#[must_use]
#[derive(Debug)]
pub struct Scratch<'p> {
    arena: RefMut<'p, Arena>,
    start: usize,
}

impl Scratch<'_> {
    /// The cursor position the slot rewinds to on release.
    pub fn start_pos(&self) -> usize {
        self.start
    }

    /// Release the scratch arena now.
    ///
    /// Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Deref for Scratch<'_> {
    type Target = Arena;

    fn deref(&self) -> &Arena {
        &self.arena
    }
}

impl DerefMut for Scratch<'_> {
    fn deref_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        let start = self.start;
        self.arena.pop_to(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::HEADER_SIZE;
    use crate::config::ArenaConfig;

    fn small_pool(slots: usize) -> ScratchPool {
        ScratchPool::new(ScratchConfig {
            slots,
            arena: ArenaConfig::new(64 << 10, 4 << 10),
        })
        .unwrap()
    }

    #[test]
    fn slots_are_created_lazily() {
        let pool = small_pool(2);
        assert_eq!(pool.created_slots(), 0);

        let scratch = pool.acquire(&[]).unwrap();
        assert_eq!(pool.created_slots(), 1);
        scratch.release();

        assert_eq!(pool.created_slots(), 1);
    }

    #[test]
    fn conflicting_slot_is_skipped() {
        let pool = small_pool(2);
        let first = pool.acquire(&[]).unwrap();
        let second = pool.acquire(&[&*first]).unwrap();
        assert!(!first.ptr_eq(&second));
    }

    #[test]
    fn all_slots_conflicting_reports_exhausted() {
        let pool = small_pool(2);
        let a = pool.acquire(&[]).unwrap();
        let b = pool.acquire(&[&*a]).unwrap();

        let err = pool.acquire(&[&*a, &*b]).unwrap_err();
        assert_eq!(err, ArenaError::ScratchExhausted { slots: 2 });
    }

    #[test]
    fn overlapping_acquires_beyond_the_slot_count_report_exhausted() {
        let pool = small_pool(2);
        let _a = pool.acquire(&[]).unwrap();
        let _b = pool.acquire(&[]).unwrap();

        // Both slots are mid-use; a third overlapping request must be
        // refused rather than aliased.
        let err = pool.acquire(&[]).unwrap_err();
        assert!(matches!(err, ArenaError::ScratchExhausted { slots: 2 }));
    }

    #[test]
    fn release_rewinds_the_slot() {
        let pool = small_pool(1);
        {
            let scratch = pool.acquire(&[]).unwrap();
            scratch.push_bytes(4096).unwrap();
            assert!(scratch.pos() > HEADER_SIZE);
        }

        let scratch = pool.acquire(&[]).unwrap();
        assert_eq!(scratch.pos(), HEADER_SIZE);
    }

    #[test]
    fn nested_acquires_rewind_independently() {
        let pool = small_pool(2);

        let outer = pool.acquire(&[]).unwrap();
        outer.push_bytes(100).unwrap();
        let outer_pos = outer.pos();

        {
            let inner = pool.acquire(&[&*outer]).unwrap();
            inner.push_bytes(5000).unwrap();
        }

        // Releasing the inner scratch must not disturb the outer one.
        assert_eq!(outer.pos(), outer_pos);
        drop(outer);

        let again = pool.acquire(&[]).unwrap();
        assert_eq!(again.pos(), HEADER_SIZE);
    }

    #[test]
    fn conflicts_against_foreign_arenas_do_not_block() {
        let pool = small_pool(1);
        let foreign = Arena::new(ArenaConfig::new(64 << 10, 4 << 10)).unwrap();

        // A caller-owned arena can never alias a pool slot; the pool
        // should still hand its slot out.
        let scratch = pool.acquire(&[&foreign]).unwrap();
        assert!(!scratch.ptr_eq(&foreign));
    }

    #[test]
    fn larger_pools_serve_more_overlapping_requests() {
        let pool = small_pool(3);
        let a = pool.acquire(&[]).unwrap();
        let b = pool.acquire(&[]).unwrap();
        let c = pool.acquire(&[]).unwrap();

        assert!(!a.ptr_eq(&b) && !b.ptr_eq(&c) && !a.ptr_eq(&c));
        assert!(pool.acquire(&[]).is_err());
    }

    #[test]
    fn scratch_creation_failure_propagates() {
        let pool = ScratchPool::new(ScratchConfig {
            slots: 1,
            arena: ArenaConfig::new(usize::MAX / 4, 1 << 20),
        })
        .unwrap();

        let err = pool.acquire(&[]).unwrap_err();
        assert!(matches!(err, ArenaError::ReserveFailed { .. }));
    }

    #[test]
    fn zero_slot_config_is_rejected_at_construction() {
        let config = ScratchConfig {
            slots: 0,
            ..ScratchConfig::default()
        };
        assert!(ScratchPool::new(config).is_err());
    }
}
