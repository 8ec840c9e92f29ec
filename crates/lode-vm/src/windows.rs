//! Windows backend: `VirtualAlloc`/`VirtualFree`.

use core::mem;
use core::ptr::{self, NonNull};

use windows_sys::Win32::System::Memory::{
    VirtualAlloc, VirtualFree, MEM_COMMIT, MEM_DECOMMIT, MEM_RELEASE, MEM_RESERVE, PAGE_NOACCESS,
    PAGE_READWRITE,
};
use windows_sys::Win32::System::SystemInformation::{GetSystemInfo, SYSTEM_INFO};

pub fn page_size() -> usize {
    // SAFETY: GetSystemInfo writes the whole struct; zeroed is a valid
    // initial value for it.
    let mut info: SYSTEM_INFO = unsafe { mem::zeroed() };
    unsafe {
        GetSystemInfo(&mut info);
    }
    assert!(info.dwPageSize > 0, "unsupported page size {}", info.dwPageSize);
    info.dwPageSize as usize
}

pub fn reserve(size: usize) -> Option<NonNull<u8>> {
    // SAFETY: reserving with no requested address; the kernel picks a
    // free range or returns null.
    let out = unsafe { VirtualAlloc(ptr::null(), size, MEM_RESERVE, PAGE_NOACCESS) };
    NonNull::new(out.cast::<u8>())
}

pub unsafe fn commit(ptr: NonNull<u8>, size: usize) -> bool {
    // SAFETY: per the caller's contract the range lies inside a live
    // reservation.
    let out = unsafe { VirtualAlloc(ptr.as_ptr().cast(), size, MEM_COMMIT, PAGE_READWRITE) };
    !out.is_null()
}

pub unsafe fn decommit(ptr: NonNull<u8>, size: usize) -> bool {
    // SAFETY: per the caller's contract the range lies inside a live
    // reservation and nothing references it.
    unsafe { VirtualFree(ptr.as_ptr().cast(), size, MEM_DECOMMIT) != 0 }
}

pub unsafe fn release(ptr: NonNull<u8>, _size: usize) -> bool {
    // Size must be zero when releasing a whole reservation on Windows.
    //
    // SAFETY: per the caller's contract `ptr` is the base of a live
    // reservation.
    unsafe { VirtualFree(ptr.as_ptr().cast(), 0, MEM_RELEASE) != 0 }
}
