//! Lode: a growable virtual-memory arena allocator with scoped rewind
//! and per-context scratch pools.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Lode sub-crates. For most users, adding `lode` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lode::{Arena, ArenaConfig};
//!
//! // Reserve 1 MiB of address space, commit 64 KiB at a time.
//! let mut arena = Arena::new(ArenaConfig::new(1 << 20, 64 << 10)).unwrap();
//!
//! // Allocations are pointer-aligned, zero-filled, and address-stable
//! // until the arena rewinds past them.
//! let header = arena.push_slice::<u32>(4).unwrap();
//! header.copy_from_slice(&[1, 2, 3, 4]);
//!
//! // Transient work inside a checkpoint costs nothing afterwards.
//! let before = arena.pos();
//! {
//!     let temp = arena.begin_temp();
//!     temp.push_bytes(10_000).unwrap();
//! }
//! assert_eq!(arena.pos(), before);
//! ```
//!
//! Scratch pools hand out conflict-checked transient arenas:
//!
//! ```rust
//! use lode::{ScratchConfig, ScratchPool};
//!
//! let pool = ScratchPool::new(ScratchConfig::default()).unwrap();
//!
//! let scratch = pool.acquire(&[]).unwrap();
//! let staging = scratch.push_bytes(256).unwrap();
//! staging.fill(7);
//! scratch.release(); // the slot rewinds for the next acquire
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the top-level re-exports:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `lode-arena` | `Arena`, `Temp`, `ScratchPool`, configs, errors |
//! | [`vm`] | `lode-vm` | Reserve/commit/release primitives, `page_size` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use lode_arena as arena;
pub use lode_vm as vm;

pub use lode_arena::{
    Arena, ArenaConfig, ArenaError, Scratch, ScratchConfig, ScratchPool, Temp, ALIGN, HEADER_SIZE,
};

/// Commonly used types, importable as a unit.
pub mod prelude {
    pub use lode_arena::{Arena, ArenaConfig, ArenaError, ScratchConfig, ScratchPool};
}
