//! Virtual-memory primitives backing the Lode arena allocator.
//!
//! This is the leaf crate of the workspace: a thin, synchronous wrapper
//! over the operating system's address-space reservation, protection and
//! release calls. It knows nothing about arenas — it only distinguishes
//! *reserving* address space (no access, no physical backing) from
//! *committing* it (read/write access, backed by physical pages on first
//! touch).
//!
//! On Unix, reservation is `mmap(2)` with `PROT_NONE` and committing is
//! `mprotect(2)` with `PROT_READ | PROT_WRITE`. On Windows, the same
//! split maps onto `VirtualAlloc` with `MEM_RESERVE` / `MEM_COMMIT` and
//! `VirtualFree`.
//!
//! All operations complete or fail immediately; failures are reported
//! through return values and never retried here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use core::ptr::NonNull;

/// Query the platform allocation granularity in bytes.
///
/// This is the unit every reservation and commit range is rounded to.
/// The value is constant for the lifetime of the process.
///
/// # Panics
///
/// Panics if the OS reports a nonsensical page size (zero or negative).
/// That only happens on platforms this crate does not support.
pub fn page_size() -> usize {
    imp::page_size()
}

/// Reserve `size` bytes of virtual address space.
///
/// The returned range has no read/write access and no physical backing;
/// it only pins down addresses. Grant access with [`commit`] before
/// touching any byte of it.
///
/// Returns `None` if the kernel cannot find a free span of that size
/// (address-space exhaustion) or if `size` is zero.
pub fn reserve(size: usize) -> Option<NonNull<u8>> {
    if size == 0 {
        return None;
    }
    imp::reserve(size)
}

/// Grant read/write access and physical backing to part of a reservation.
///
/// `ptr` and `size` must be aligned to [`page_size`]. Returns `false` if
/// the kernel refuses (typically memory pressure); the range is then left
/// untouched and inaccessible.
///
/// # Safety
///
/// `[ptr, ptr + size)` must lie entirely within a live range previously
/// returned by [`reserve`].
pub unsafe fn commit(ptr: NonNull<u8>, size: usize) -> bool {
    // SAFETY: forwarded; the caller guarantees the range is reserved.
    unsafe { imp::commit(ptr, size) }
}

/// Return the physical backing of a committed range to the OS.
///
/// The address range stays reserved and can be re-committed later with
/// [`commit`]. Returns `false` if the kernel refuses.
///
/// `ptr` and `size` must be aligned to [`page_size`].
///
/// # Safety
///
/// `[ptr, ptr + size)` must lie entirely within a live range previously
/// returned by [`reserve`], and no live reference may point into it.
pub unsafe fn decommit(ptr: NonNull<u8>, size: usize) -> bool {
    // SAFETY: forwarded; the caller guarantees the range is reserved.
    unsafe { imp::decommit(ptr, size) }
}

/// Release an entire reservation back to the OS.
///
/// `ptr` must be the exact base returned by [`reserve`] and `size` the
/// exact size passed to it. Every address in the range becomes invalid.
///
/// # Safety
///
/// The reservation must be live, `ptr`/`size` must match the original
/// [`reserve`] call, and no live reference may point into the range.
pub unsafe fn release(ptr: NonNull<u8>, size: usize) -> bool {
    // SAFETY: forwarded; the caller guarantees the range is a whole
    // live reservation.
    unsafe { imp::release(ptr, size) }
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix as imp;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use windows as imp;
