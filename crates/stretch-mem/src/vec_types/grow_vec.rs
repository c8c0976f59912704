use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::NonNull,
    slice,
};

use std::sync::Arc;

use crate::{
    Allocator, GlobalAlloc, Result, VecError, PushError,
    capacity_policy::{GrowthPolicy, ShrinkPolicy, Overallocate},
};

use super::strategies::{move_elements, clone_elements, drop_in_place};

use VecError::{InvalidArgument, EmptyContainer, PolicyViolation, AllocFailed, ZeroSizedElement};

/// Contiguous growable array whose capacity is a first class value.
///
/// Every reallocation is decided by the active [`GrowthPolicy`] (on push)
/// or [`ShrinkPolicy`] (on pop/truncate). Without a shrink policy the
/// capacity never goes down on its own.
pub struct GrowVec<T, A: Allocator = GlobalAlloc> {
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    reallocs: usize,
    skipped_shrinks: usize,
    growth: Arc<dyn GrowthPolicy>,
    shrink: Option<Arc<dyn ShrinkPolicy>>,
    alloc: A,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send, A: Allocator + Send> Send for GrowVec<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for GrowVec<T, A> {}

const_assert!(size_of!(GrowVec<u32>) == size_of!(Option<GrowVec<u32>>));

impl<T> GrowVec<T> {

    #[inline(always)]
    pub fn new() -> Self {
        Self::new_in(GlobalAlloc)
    }

    /// Exactly sized copy of `values`, like a literal.
    pub fn from_slice(values: &[T]) -> Result<Self>
        where
            T: Clone
    {
        Self::from_slice_in(values, GlobalAlloc)
    }

    /// `count` clones of `value` in a block of exactly `count` slots.
    pub fn from_elem(value: T, count: usize) -> Result<Self>
        where
            T: Clone
    {
        let mut vec = Self::new();
        vec.reserve_exact(count)?;
        for _ in 0..count {
            unsafe { vec.data.add(vec.len).write(value.clone()) };
            vec.len += 1;
        }
        Ok(vec)
    }

    /// Pushes every item through the growth policy.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
        where
            I: IntoIterator<Item = T>,
    {
        let mut vec = Self::new();
        vec.try_extend(iter)?;
        Ok(vec)
    }
}

impl<T, A: Allocator> GrowVec<T, A> {

    pub fn new_in(alloc: A) -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            reallocs: 0,
            skipped_shrinks: 0,
            growth: Arc::new(Overallocate),
            shrink: None,
            alloc,
            _marker: PhantomData,
        }
    }

    pub fn from_slice_in(values: &[T], alloc: A) -> Result<Self>
        where
            T: Clone
    {
        let mut vec = Self::new_in(alloc);
        vec.reserve_exact(values.len())?;
        unsafe {
            clone_elements(
                NonNull::from(values).cast::<T>(),
                vec.data,
                values.len(),
                &mut vec.len,
            );
        }
        Ok(vec)
    }

    #[inline(always)]
    pub fn with_growth_policy(mut self, policy: impl GrowthPolicy + 'static) -> Self {
        self.set_growth_policy(policy);
        self
    }

    #[inline(always)]
    pub fn with_shrink_policy(mut self, policy: impl ShrinkPolicy + 'static) -> Self {
        self.set_shrink_policy(policy);
        self
    }

    #[inline(always)]
    pub fn set_growth_policy(&mut self, policy: impl GrowthPolicy + 'static) {
        self.growth = Arc::new(policy);
    }

    #[inline(always)]
    pub fn set_shrink_policy(&mut self, policy: impl ShrinkPolicy + 'static) {
        self.shrink = Some(Arc::new(policy));
    }

    /// Back to never shrinking automatically.
    #[inline(always)]
    pub fn clear_shrink_policy(&mut self) {
        self.shrink = None;
    }

    #[inline(always)]
    pub fn shrinks(&self) -> bool {
        self.shrink.is_some()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of times the backing block was replaced, the first allocation
    /// included.
    #[inline(always)]
    pub fn realloc_count(&self) -> usize {
        self.reallocs
    }

    /// Shrinks the policy asked for but the allocator could not serve. The
    /// old block is kept in that case.
    #[inline(always)]
    pub fn skipped_shrinks(&self) -> usize {
        self.skipped_shrinks
    }

    #[inline(always)]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Appends `value`, growing through the growth policy when full.
    ///
    /// On failure the vector is untouched and `value` comes back inside the
    /// error. Zero sized `T` cannot be allocated, so the first push of one
    /// fails with [`VecError::ZeroSizedElement`].
    pub fn push(&mut self, value: T) -> core::result::Result<&mut T, PushError<T>> {
        if self.len == self.capacity {
            let grown = self.len
                .checked_add(1)
                .ok_or(AllocFailed { new_capacity: usize::MAX })
                .and_then(|required| self.grow_for(required));
            if let Err(error) = grown {
                return Err(PushError { value, error })
            }
        }
        unsafe {
            let mut ptr = self.data.add(self.len);
            ptr.write(value);
            self.len += 1;
            Ok(ptr.as_mut())
        }
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(EmptyContainer)
        }
        let new_len = self.len - 1;
        let target = self.shrink_target(new_len)?;
        self.len = new_len;
        let value = unsafe { self.data.add(new_len).read() };
        self.apply_shrink(target);
        Ok(value)
    }

    /// Drops everything past `new_len`, then consults the shrink policy.
    pub fn truncate(&mut self, new_len: usize) -> Result<()> {
        if new_len > self.len {
            return Err(InvalidArgument { requested: new_len, len: self.len })
        }
        let target = self.shrink_target(new_len)?;
        self.drop_tail(new_len);
        self.apply_shrink(target);
        Ok(())
    }

    pub fn clear(&mut self) {
        let target = self.shrink_target(0).unwrap_or(None);
        self.drop_tail(0);
        self.apply_shrink(target);
    }

    /// Makes room for `total` elements without asking the growth policy.
    pub fn reserve_exact(&mut self, total: usize) -> Result<()> {
        if total <= self.capacity {
            return Ok(())
        }
        self.reallocate(total)
    }

    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.capacity == self.len {
            return Ok(())
        }
        self.reallocate(self.len)
    }

    /// Compacted clone: the copy holds exactly `len` slots and shares this
    /// vector's policies.
    pub fn copy(&self) -> Result<Self>
        where
            T: Clone,
            A: Clone,
    {
        let mut copy = Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            reallocs: 0,
            skipped_shrinks: 0,
            growth: self.growth.clone(),
            shrink: self.shrink.clone(),
            alloc: self.alloc.clone(),
            _marker: PhantomData,
        };
        copy.reserve_exact(self.len)?;
        unsafe { clone_elements(self.data, copy.data, self.len, &mut copy.len) };
        Ok(copy)
    }

    pub fn try_extend<I>(&mut self, iter: I) -> Result<()>
        where
            I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    fn grow_for(&mut self, required: usize) -> Result<()> {
        let returned = self.growth.grow(self.capacity, required);
        if returned < required {
            return Err(PolicyViolation { required, returned })
        }
        self.reallocate(returned)
    }

    fn shrink_target(&self, new_len: usize) -> Result<Option<usize>> {
        let Some(policy) = &self.shrink else {
            return Ok(None)
        };
        match policy.shrink(new_len, self.capacity) {
            Some(returned) if returned < new_len => {
                Err(PolicyViolation { required: new_len, returned })
            },
            Some(returned) if returned < self.capacity => Ok(Some(returned)),
            _ => Ok(None),
        }
    }

    fn apply_shrink(&mut self, target: Option<usize>) {
        if let Some(capacity) = target {
            if self.reallocate(capacity).is_err() {
                self.skipped_shrinks += 1;
            }
        }
    }

    fn drop_tail(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.len);
        let removed = self.len - new_len;
        self.len = new_len;
        unsafe { drop_in_place(self.data.add(new_len), removed) };
    }

    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(self.len <= new_capacity);
        let data =
            if new_capacity == 0 {
                NonNull::dangling()
            }
            else {
                match unsafe { self.alloc.allocate_uninit::<T>(new_capacity) } {
                    Some(r) => r,
                    None => return Err(
                        if size_of::<T>() == 0 {
                            ZeroSizedElement
                        }
                        else {
                            AllocFailed { new_capacity }
                        }
                    ),
                }
            };
        unsafe { move_elements(self.data, data, self.len) };
        self.release();
        self.data = data;
        self.capacity = new_capacity;
        self.reallocs += 1;
        Ok(())
    }

    fn release(&mut self) {
        if self.capacity != 0 {
            unsafe { self.alloc.free_uninit(self.data, self.capacity) };
        }
    }
}

impl<T> Default for GrowVec<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator> Drop for GrowVec<T, A> {

    fn drop(&mut self) {
        self.drop_tail(0);
        self.release();
    }
}

impl<T, A: Allocator> Index<usize> for GrowVec<T, A> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<T, A: Allocator> IndexMut<usize> for GrowVec<T, A> {

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}

impl<T, A: Allocator> Deref for GrowVec<T, A> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for GrowVec<T, A> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for GrowVec<T, A> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for GrowVec<T, A> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'vec, T, A: Allocator> IntoIterator for &'vec GrowVec<T, A> {

    type Item = &'vec T;
    type IntoIter = slice::Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, T, A: Allocator> IntoIterator for &'vec mut GrowVec<T, A> {

    type Item = &'vec mut T;
    type IntoIter = slice::IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A: Allocator> Extend<T> for GrowVec<T, A> {

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.try_extend(iter) {
            panic!("failed to extend: {}", err)
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Debug, A: Allocator> Debug for GrowVec<T, A> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: Allocator> PartialEq<[T]> for GrowVec<T, A> {

    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A: Allocator, const N: usize> PartialEq<[T; N]> for GrowVec<T, A> {

    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<GrowVec<T, B>> for GrowVec<T, A> {

    fn eq(&self, other: &GrowVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        cell::Cell,
        rc::Rc,
    };

    use crate::{CountingAlloc, Doubling, Exact, HalfOccupancy, Mirror};

    #[derive(Clone)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {

        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn starts_empty() {
        let v = GrowVec::<i32>::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert_eq!(v.realloc_count(), 0);
    }

    #[test]
    fn default_growth_transitions() {
        let mut v = GrowVec::new();
        let mut transitions = vec![];
        let mut last = v.capacity();
        for i in 0..100 {
            v.push(i).unwrap();
            if v.capacity() != last {
                transitions.push((v.len(), v.capacity()));
                last = v.capacity();
            }
        }
        assert_eq!(
            transitions,
            [
                (1, 4), (5, 8), (9, 16), (17, 24), (25, 32), (33, 40),
                (41, 52), (53, 64), (65, 76), (77, 92), (93, 108),
            ],
        );
        assert_eq!(v.realloc_count(), transitions.len());
        assert!(v.iter().copied().eq(0..100));
    }

    #[test]
    fn push_returns_slot() {
        let mut v = GrowVec::new();
        *v.push(1).unwrap() += 10;
        assert_eq!(v, [11]);
    }

    #[test]
    fn broken_growth_policy_is_rejected() {
        let mut v = GrowVec::new().with_growth_policy(|capacity: usize, _: usize| capacity);
        let err = v.push(String::from("kept")).unwrap_err();
        assert_eq!(err.error(), PolicyViolation { required: 1, returned: 0 });
        assert_eq!(err.into_inner(), "kept");
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn growth_policy_can_be_swapped() {
        let mut v = GrowVec::new().with_growth_policy(Exact);
        v.try_extend(0..3).unwrap();
        assert_eq!(v.capacity(), 3);
        v.set_growth_policy(Doubling);
        v.push(3).unwrap();
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn pop_on_empty_fails() {
        let mut v = GrowVec::<u8>::new();
        assert_eq!(v.pop(), Err(EmptyContainer));
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn pop_returns_last() {
        let mut v = GrowVec::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.pop(), Ok(3));
        assert_eq!(v.pop(), Ok(2));
        assert_eq!(v, [1]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn truncate_past_len_is_rejected() {
        let mut v = GrowVec::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.truncate(4), Err(InvalidArgument { requested: 4, len: 3 }));
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn truncate_without_shrink_keeps_capacity() {
        let mut v: GrowVec<_> = (0..100).collect();
        let capacity = v.capacity();
        for len in (0..100).rev() {
            v.truncate(len).unwrap();
            assert_eq!(v.capacity(), capacity);
        }
        assert!(v.is_empty());
    }

    #[test]
    fn truncate_with_half_occupancy_shrinks() {
        let mut v: GrowVec<_> = (0..100).collect();
        v.set_shrink_policy(HalfOccupancy::default());
        assert_eq!(v.capacity(), 108);
        v.truncate(54).unwrap();
        assert_eq!(v.capacity(), 108);
        v.truncate(53).unwrap();
        assert_eq!(v.capacity(), 59);
        assert!(v.iter().copied().eq(0..53));
        v.truncate(0).unwrap();
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn half_occupancy_shrinks_odd_capacity() {
        let mut v = GrowVec::new().with_shrink_policy(HalfOccupancy::default());
        v.reserve_exact(5).unwrap();
        v.try_extend(0..5).unwrap();
        v.truncate(3).unwrap();
        assert_eq!(v.capacity(), 5);
        v.truncate(2).unwrap();
        assert_eq!(v.capacity(), 2);
        assert_eq!(v, [0, 1]);
    }

    struct Budget(Cell<usize>);

    impl Allocator for Budget {

        unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
            let left = self.0.get();
            if left == 0 {
                return None
            }
            self.0.set(left - 1);
            unsafe { GlobalAlloc.allocate_raw(size, align) }
        }

        unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
            unsafe { GlobalAlloc.free_raw(ptr, size, align) }
        }
    }

    #[test]
    fn failed_shrink_is_counted() {
        let mut v = GrowVec::new_in(Budget(Cell::new(1)))
            .with_shrink_policy(HalfOccupancy::default());
        v.reserve_exact(100).unwrap();
        v.try_extend(0..10).unwrap();
        assert_eq!(v.truncate(5), Ok(()));
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 100);
        assert_eq!(v.skipped_shrinks(), 1);
        assert_eq!(v.realloc_count(), 1);
        assert_eq!(v.pop(), Ok(4));
        assert_eq!(v.skipped_shrinks(), 2);
        assert_eq!(v.shrink_to_fit(), Err(AllocFailed { new_capacity: 4 }));
        assert_eq!(v, [0, 1, 2, 3]);
    }

    #[test]
    fn mirror_shrinks_on_pop() {
        let mut v: GrowVec<_> = (0..100).collect();
        v.set_shrink_policy(Mirror);
        while v.len() > 53 {
            v.pop().unwrap();
        }
        assert_eq!(v.capacity(), 64);
        v.clear();
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn broken_shrink_policy_leaves_vector_alone() {
        let mut v = GrowVec::from_slice(&[1, 2, 3, 4]).unwrap()
            .with_shrink_policy(|_: usize, _: usize| Some(0usize));
        assert_eq!(v.truncate(2), Err(PolicyViolation { required: 2, returned: 0 }));
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.pop(), Err(PolicyViolation { required: 3, returned: 0 }));
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn clear_shrink_policy_stops_shrinking() {
        let mut v: GrowVec<_> = (0..40).collect();
        v.set_shrink_policy(HalfOccupancy::default());
        v.clear_shrink_policy();
        assert!(!v.shrinks());
        v.truncate(1).unwrap();
        assert_eq!(v.capacity(), 40);
    }

    #[test]
    fn copy_is_compacted() {
        let mut v = GrowVec::new();
        v.reserve_exact(100).unwrap();
        v.try_extend(0..10).unwrap();
        assert_eq!(v.capacity(), 100);
        let c = v.copy().unwrap();
        assert_eq!(c.capacity(), 10);
        assert_eq!(c, v);
        assert_eq!(v.capacity(), 100);
    }

    #[test]
    fn copy_of_empty_allocates_nothing() {
        let counter = CountingAlloc::new();
        let mut v = GrowVec::<u64, _>::new_in(&counter);
        v.reserve_exact(16).unwrap();
        let c = v.copy().unwrap();
        assert_eq!(c.capacity(), 0);
        assert_eq!(counter.stats().allocations, 1);
    }

    #[test]
    fn copy_keeps_policies() {
        let v = GrowVec::from_slice(&[1u8; 8]).unwrap()
            .with_growth_policy(Exact)
            .with_shrink_policy(HalfOccupancy::default());
        let mut c = v.copy().unwrap();
        assert!(c.shrinks());
        c.push(9).unwrap();
        assert_eq!(c.capacity(), 9);
    }

    #[test]
    fn construction_routes() {
        assert_eq!(GrowVec::from_slice(&[1, 1, 1]).unwrap().capacity(), 3);
        assert_eq!(GrowVec::from_elem(1, 3).unwrap().capacity(), 3);
        let pushed: GrowVec<_> = (0..3).map(|_| 1).collect();
        assert_eq!(pushed.capacity(), 4);
        assert_eq!(GrowVec::from_elem(7, 0).unwrap().capacity(), 0);
    }

    #[test]
    fn shrink_to_fit_compacts_in_place() {
        let mut v: GrowVec<_> = (0..10).collect();
        assert_eq!(v.capacity(), 16);
        v.shrink_to_fit().unwrap();
        assert_eq!(v.capacity(), 10);
        assert!(v.iter().copied().eq(0..10));
    }

    #[test]
    fn every_element_dropped_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut v = GrowVec::new().with_shrink_policy(Mirror);
            for _ in 0..50 {
                v.push(DropCounter(drops.clone())).unwrap();
            }
            drop(v.pop().unwrap());
            assert_eq!(drops.get(), 1);
            v.truncate(20).unwrap();
            assert_eq!(drops.get(), 30);
            let c = v.copy().unwrap();
            drop(c);
            assert_eq!(drops.get(), 50);
        }
        assert_eq!(drops.get(), 70);
    }

    #[test]
    fn no_blocks_leak() {
        let counter = CountingAlloc::new();
        {
            let mut v = GrowVec::new_in(&counter).with_shrink_policy(HalfOccupancy::default());
            v.try_extend((0..1000).map(|i| i.to_string())).unwrap();
            v.truncate(3).unwrap();
            let _c = v.copy().unwrap();
            assert_eq!(counter.stats().live_blocks, 2);
        }
        let stats = counter.stats();
        assert_eq!(stats.live_blocks, 0);
        assert_eq!(stats.live_bytes, 0);
        assert_eq!(stats.allocations, stats.frees);
    }

    #[test]
    fn zero_sized_elements_are_rejected() {
        let mut v = GrowVec::<()>::new();
        assert_eq!(v.push(()).unwrap_err().error(), ZeroSizedElement);
        assert!(v.is_empty());
        assert_eq!(v.skipped_shrinks(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_past_len_panics() {
        let v = GrowVec::from_slice(&[1]).unwrap();
        let _ = v[1];
    }
}
