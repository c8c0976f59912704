use core::{
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{Allocator, GlobalAlloc};

/// Snapshot of a [`CountingAlloc`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct AllocStats {
    pub allocations: usize,
    pub frees: usize,
    pub live_blocks: usize,
    pub live_bytes: usize,
    pub peak_bytes: usize,
}

/// [`GlobalAlloc`] wrapper that counts every block it hands out.
///
/// Pass it by reference (`GrowVec::new_in(&counter)`) so the counters stay
/// readable after the vector is gone.
#[derive(Default, Debug)]
pub struct CountingAlloc {
    allocations: AtomicUsize,
    frees: AtomicUsize,
    live_bytes: AtomicUsize,
    peak_bytes: AtomicUsize,
}

impl CountingAlloc {

    pub const fn new() -> Self {
        Self {
            allocations: AtomicUsize::new(0),
            frees: AtomicUsize::new(0),
            live_bytes: AtomicUsize::new(0),
            peak_bytes: AtomicUsize::new(0),
        }
    }

    pub fn stats(&self) -> AllocStats {
        let allocations = self.allocations.load(Ordering::Relaxed);
        let frees = self.frees.load(Ordering::Relaxed);
        AllocStats {
            allocations,
            frees,
            live_blocks: allocations - frees,
            live_bytes: self.live_bytes.load(Ordering::Relaxed),
            peak_bytes: self.peak_bytes.load(Ordering::Relaxed),
        }
    }
}

impl Allocator for CountingAlloc {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        let ptr = unsafe { GlobalAlloc.allocate_raw(size, align)? };
        self.allocations.fetch_add(1, Ordering::Relaxed);
        let live = self.live_bytes.fetch_add(size, Ordering::Relaxed) + size;
        self.peak_bytes.fetch_max(live, Ordering::Relaxed);
        Some(ptr)
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        unsafe { GlobalAlloc.free_raw(ptr, size, align) }
        self.frees.fetch_add(1, Ordering::Relaxed);
        self.live_bytes.fetch_sub(size, Ordering::Relaxed);
    }
}
