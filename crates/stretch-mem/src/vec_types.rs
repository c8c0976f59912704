mod strategies;
mod grow_vec;

pub use grow_vec::GrowVec;
