//! Unix backend: `mmap`/`mprotect`/`madvise`/`munmap`.

use core::ptr::{self, NonNull};

pub fn page_size() -> usize {
    // SAFETY: sysconf with a valid name is always safe to call.
    let n = unsafe { libc::sysconf(libc::_SC_PAGE_SIZE) };
    assert!(n > 0, "unsupported page size {n}");
    n as usize
}

pub fn reserve(size: usize) -> Option<NonNull<u8>> {
    // PROT_NONE keeps the range inaccessible until commit flips the
    // protection, so a stray pointer into uncommitted space faults
    // instead of silently mapping pages.
    //
    // SAFETY: anonymous private mapping with no requested address; the
    // kernel picks a free range or reports failure.
    let out = unsafe {
        libc::mmap(
            ptr::null_mut(),
            size,
            libc::PROT_NONE,
            libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
            -1,
            0,
        )
    };
    if out == libc::MAP_FAILED {
        return None;
    }
    NonNull::new(out.cast::<u8>())
}

pub unsafe fn commit(ptr: NonNull<u8>, size: usize) -> bool {
    // SAFETY: per the caller's contract the range lies inside a live
    // mapping created by `reserve`.
    let ret = unsafe { libc::mprotect(ptr.as_ptr().cast(), size, libc::PROT_READ | libc::PROT_WRITE) };
    ret == 0
}

pub unsafe fn decommit(ptr: NonNull<u8>, size: usize) -> bool {
    // MADV_DONTNEED drops the physical pages while the range is still
    // accessible, then PROT_NONE restores reserve-only protection so the
    // range behaves exactly like it did before the first commit.
    //
    // SAFETY: per the caller's contract the range lies inside a live
    // mapping and nothing references it.
    unsafe {
        if libc::madvise(ptr.as_ptr().cast(), size, libc::MADV_DONTNEED) != 0 {
            return false;
        }
        libc::mprotect(ptr.as_ptr().cast(), size, libc::PROT_NONE) == 0
    }
}

pub unsafe fn release(ptr: NonNull<u8>, size: usize) -> bool {
    // SAFETY: per the caller's contract this is a whole live mapping.
    let ret = unsafe { libc::munmap(ptr.as_ptr().cast(), size) };
    ret == 0
}
