#[macro_use]

mod macros;
pub mod capacity_policy;
pub mod vec_types;

mod errors;
mod allocator;
mod global_alloc;
mod counting_alloc;

pub use errors::{VecError, PushError};
pub use allocator::Allocator;
pub use global_alloc::GlobalAlloc;
pub use counting_alloc::{CountingAlloc, AllocStats};
pub use capacity_policy::{
    GrowthPolicy, ShrinkPolicy,
    Overallocate, Doubling, Exact,
    HalfOccupancy, Mirror,
};
pub use vec_types::GrowVec;

pub type Result<T> = core::result::Result<T, VecError>;
