//! Growth and shrink policies for [`GrowVec`](crate::GrowVec).
//!
//! A growth policy is asked for a new capacity whenever a push finds the
//! vector full. A shrink policy is asked after every removal and may return
//! a smaller capacity. Both are plain functions of the current numbers, so
//! any matching closure works as a policy:
//!
//! ```rust
//! use stretch_mem::GrowVec;
//!
//! let mut v = GrowVec::<u8>::new();
//! v.set_growth_policy(|_capacity: usize, required: usize| required + 1);
//! v.push(1).unwrap();
//! assert_eq!(v.capacity(), 2);
//! ```

use crate::{Result, VecError};

pub trait GrowthPolicy: Send + Sync {

    /// Returns the capacity to allocate when `required` slots are needed and
    /// only `capacity` are reserved. Must be at least `required`.
    fn grow(&self, capacity: usize, required: usize) -> usize;
}

pub trait ShrinkPolicy: Send + Sync {

    /// Returns `Some(new_capacity)` to reallocate after the length dropped to
    /// `len`. `new_capacity` must be at least `len`.
    fn shrink(&self, len: usize, capacity: usize) -> Option<usize>;
}

impl<F> GrowthPolicy for F
    where
        F: Fn(usize, usize) -> usize + Send + Sync,
{

    #[inline(always)]
    fn grow(&self, capacity: usize, required: usize) -> usize {
        self(capacity, required)
    }
}

impl<F> ShrinkPolicy for F
    where
        F: Fn(usize, usize) -> Option<usize> + Send + Sync,
{

    #[inline(always)]
    fn shrink(&self, len: usize, capacity: usize) -> Option<usize> {
        self(len, capacity)
    }
}

/// `(m + m / 8 + 6)` rounded down to a multiple of four.
///
/// Saturates instead of overflowing, so a result below `required` means the
/// request cannot be satisfied.
#[inline(always)]
pub const fn overallocate(required: usize) -> usize {
    required
        .saturating_add(required >> 3)
        .saturating_add(6)
        & !3
}

/// Geometric-plus-additive over-allocation. The default growth policy.
///
/// Pushing 1..=100 elements from empty moves the capacity through
/// 4, 8, 16, 24, 32, 40, 52, 64, 76, 92, 108.
#[derive(Clone, Copy, Default, Debug)]
pub struct Overallocate;

impl GrowthPolicy for Overallocate {

    #[inline(always)]
    fn grow(&self, _: usize, required: usize) -> usize {
        overallocate(required)
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct Doubling;

impl GrowthPolicy for Doubling {

    #[inline(always)]
    fn grow(&self, capacity: usize, required: usize) -> usize {
        required
            .max(capacity.saturating_mul(2))
            .max(2)
            .checked_next_power_of_two()
            .unwrap_or(0)
    }
}

/// Allocates exactly what is required.
#[derive(Clone, Copy, Default, Debug)]
pub struct Exact;

impl GrowthPolicy for Exact {

    #[inline(always)]
    fn grow(&self, _: usize, required: usize) -> usize {
        required
    }
}

/// Shrinks once occupancy falls under half of the capacity.
///
/// The new capacity is `len * slack` (never below `len`), with `slack`
/// restricted to `[1.0, 1.2]`.
#[derive(Clone, Copy, Debug)]
pub struct HalfOccupancy {
    slack: f64,
}

impl HalfOccupancy {

    pub const MIN_SLACK: f64 = 1.0;
    pub const MAX_SLACK: f64 = 1.2;
    pub const DEFAULT_SLACK: f64 = 1.125;

    pub fn new(slack: f64) -> Result<Self> {
        if !(Self::MIN_SLACK..=Self::MAX_SLACK).contains(&slack) {
            return Err(VecError::InvalidSlack { slack })
        }
        Ok(Self { slack })
    }

    #[inline(always)]
    pub fn slack(&self) -> f64 {
        self.slack
    }
}

impl Default for HalfOccupancy {

    fn default() -> Self {
        Self { slack: Self::DEFAULT_SLACK }
    }
}

impl ShrinkPolicy for HalfOccupancy {

    fn shrink(&self, len: usize, capacity: usize) -> Option<usize> {
        if len.saturating_mul(2) >= capacity {
            return None
        }
        let target = (len as f64 * self.slack) as usize;
        Some(target.max(len))
    }
}

/// Shrinks the way it grows: below half occupancy the capacity becomes
/// [`overallocate`] of the new length, and an empty vector releases its
/// block entirely.
#[derive(Clone, Copy, Default, Debug)]
pub struct Mirror;

impl ShrinkPolicy for Mirror {

    fn shrink(&self, len: usize, capacity: usize) -> Option<usize> {
        if len >= capacity >> 1 {
            return None
        }
        if len == 0 {
            return Some(0)
        }
        Some(overallocate(len))
    }
}
