//! Benchmark profiles and helpers for the Lode arena allocator.
//!
//! Provides pre-built arena and pool configurations shared by the
//! criterion benches so that every bench measures against the same
//! shapes:
//!
//! - [`bench_arena`]: 256 MiB reserve / 1 MiB commit, the default-ish
//!   long-lived arena profile
//! - [`bench_pool`]: a two-slot scratch pool with the same per-slot
//!   profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lode_arena::{Arena, ArenaConfig, ScratchConfig, ScratchPool};

/// Reserve size used by the bench arenas: large enough that no bench
/// run can exhaust it between checkpoint rewinds.
pub const BENCH_RESERVE: usize = 256 << 20;

/// Commit granularity used by the bench arenas.
pub const BENCH_COMMIT: usize = 1 << 20;

/// Build the standard bench arena profile.
pub fn bench_arena() -> Arena {
    Arena::new(ArenaConfig::new(BENCH_RESERVE, BENCH_COMMIT))
        .expect("bench arena creation should not fail")
}

/// Build the standard two-slot bench pool profile.
pub fn bench_pool() -> ScratchPool {
    ScratchPool::new(ScratchConfig {
        slots: 2,
        arena: ArenaConfig::new(BENCH_RESERVE, BENCH_COMMIT),
    })
    .expect("bench pool creation should not fail")
}
