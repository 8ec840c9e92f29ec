//! Growable virtual-memory arenas with scoped rewind and scratch pools.
//!
//! This crate is the core of the Lode workspace. It builds three layers
//! on the primitives from `lode-vm`, and is the only crate besides it
//! that may contain `unsafe` code.
//!
//! # Architecture
//!
//! ```text
//! ScratchPool (per execution context)
//! ├── Slot × N (lazily created, conflict-aware first-fit)
//! │   └── Arena (64 MiB reserve / 1 MiB commit by default)
//! ├── Scratch guard (checkpoint: rewinds the slot on drop)
//! Arena
//! ├── one reserved span (lode-vm reserve, never moves)
//! ├── committed prefix (grows in commit_size steps, lazily)
//! └── Temp guard (stack-discipline checkpoint over one arena)
//! ```
//!
//! # Allocation model
//!
//! An [`Arena`] hands out pointer-aligned regions from a single
//! reserved address range; physical backing is committed on demand and
//! never relocated, so allocations are address-stable for the arena's
//! whole life. Reclamation is LIFO only: [`Arena::pop`] and friends
//! move the cursor backwards, [`Temp`] scopes do it automatically, and
//! the [`ScratchPool`] wraps slot arenas in checkpoints for transient
//! work. There is no free list and no arbitrary-order deallocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod config;
pub mod error;
pub mod scratch;
pub mod temp;

// Public re-exports for the primary API surface.
pub use arena::{Arena, ALIGN, HEADER_SIZE};
pub use config::{ArenaConfig, ScratchConfig};
pub use error::ArenaError;
pub use scratch::{Scratch, ScratchPool};
pub use temp::Temp;
