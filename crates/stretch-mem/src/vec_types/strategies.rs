use core::ptr::{self, NonNull};

/// Bitwise moves `len` initialized elements from `src` to `dst`.
///
/// The slots at `src` are logically uninitialized afterwards.
#[inline(always)]
pub unsafe fn move_elements<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    if len == 0 {
        return
    }
    unsafe {
        src.copy_to_nonoverlapping(dst, len);
    }
}

/// Clones `len` elements from `src` into the uninitialized slots at `dst`.
///
/// `on_written` is bumped after every slot so the caller's length stays
/// accurate if a `clone` panics.
#[inline(always)]
pub unsafe fn clone_elements<T: Clone>(
    src: NonNull<T>,
    dst: NonNull<T>,
    len: usize,
    on_written: &mut usize,
) {
    for i in 0..len {
        unsafe {
            dst.add(i).write(src.add(i).as_ref().clone());
        }
        *on_written += 1;
    }
}

#[inline(always)]
pub unsafe fn drop_in_place<T>(ptr: NonNull<T>, len: usize) {
    unsafe {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len));
    }
}
