//! Scratch pool usage the way consuming code drives it: a destination
//! arena owns the results, the pool supplies conflict-checked transient
//! space, and exhaustion falls back to the caller.

use lode_arena::{Arena, ArenaConfig, ArenaError, ScratchConfig, ScratchPool, HEADER_SIZE};

fn test_pool(slots: usize) -> ScratchPool {
    ScratchPool::new(ScratchConfig {
        slots,
        arena: ArenaConfig::new(256 << 10, 4 << 10),
    })
    .unwrap()
}

/// Build a table of squares in scratch space, then copy the final row
/// into the destination arena. The classic transient-work shape.
fn build_squares<'a>(
    dest: &'a Arena,
    pool: &ScratchPool,
    count: usize,
) -> Result<&'a mut [u64], ArenaError> {
    let scratch = pool.acquire(&[dest])?;

    let staging = scratch.push_slice::<u64>(count)?;
    for (i, slot) in staging.iter_mut().enumerate() {
        *slot = (i as u64) * (i as u64);
    }

    let out = dest.push_slice::<u64>(count)?;
    out.copy_from_slice(staging);
    Ok(out)
}

#[test]
fn transient_work_leaves_only_the_destination_allocation() {
    let dest = Arena::new(ArenaConfig::new(256 << 10, 4 << 10)).unwrap();
    let pool = test_pool(2);

    let squares = build_squares(&dest, &pool, 100).unwrap();
    assert_eq!(squares[9], 81);
    assert_eq!(squares[99], 99 * 99);

    // The destination holds exactly the copied row; the scratch slot
    // was rewound on release.
    assert_eq!(dest.pos(), HEADER_SIZE + 100 * 8);
    let reacquired = pool.acquire(&[&dest]).unwrap();
    assert_eq!(reacquired.pos(), HEADER_SIZE);
}

#[test]
fn nested_transient_work_uses_the_second_slot() {
    let dest = Arena::new(ArenaConfig::new(256 << 10, 4 << 10)).unwrap();
    let pool = test_pool(2);

    let outer = pool.acquire(&[&dest]).unwrap();
    outer.push_bytes(1024).unwrap();

    // A nested helper that treats the outer scratch as its destination
    // must be handed the other slot.
    let inner = pool.acquire(&[&*outer]).unwrap();
    assert!(!inner.ptr_eq(&outer));
    inner.push_bytes(2048).unwrap();

    drop(inner);
    drop(outer);

    // Both slots are rewound once the guards are gone.
    let a = pool.acquire(&[]).unwrap();
    assert_eq!(a.pos(), HEADER_SIZE);
    let b = pool.acquire(&[&*a]).unwrap();
    assert_eq!(b.pos(), HEADER_SIZE);
}

#[test]
fn exhaustion_is_surfaced_and_the_caller_can_fall_back() {
    let dest = Arena::new(ArenaConfig::new(256 << 10, 4 << 10)).unwrap();
    let pool = test_pool(1);

    let held = pool.acquire(&[&dest]).unwrap();

    // The only slot is in use, so the helper's acquire fails...
    let err = build_squares(&dest, &pool, 10).unwrap_err();
    assert!(matches!(err, ArenaError::ScratchExhausted { slots: 1 }));

    // ...and the caller falls back to its own arena for staging.
    let staged = dest.push_slice::<u64>(10).unwrap();
    staged[9] = 81;
    assert_eq!(staged[9], 81);

    drop(held);
}

#[test]
fn checkpoint_scopes_compose_with_scratch_guards() {
    let pool = test_pool(1);
    let mut scratch = pool.acquire(&[]).unwrap();

    scratch.push_bytes(100).unwrap();
    let mid = scratch.pos();

    {
        let temp = scratch.begin_temp();
        temp.push_bytes(5000).unwrap();
    }
    assert_eq!(scratch.pos(), mid);

    drop(scratch);
    let again = pool.acquire(&[]).unwrap();
    assert_eq!(again.pos(), HEADER_SIZE);
}
