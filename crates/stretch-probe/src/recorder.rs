use stretch_mem::{GrowVec, VecError};

use stretch_log::debug;

/// How a vector was first filled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    /// Size known up front, exact capacity.
    Literal,
    /// `n` clones of one value, exact capacity.
    Repeat,
    /// One push at a time through the growth policy.
    Comprehension,
    /// Conversion from a sized range, exact capacity.
    Range,
}

impl Route {

    pub const ALL: [Route; 4] = [Self::Literal, Self::Repeat, Self::Comprehension, Self::Range];

    pub fn name(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Repeat => "repeat",
            Self::Comprehension => "comprehension",
            Self::Range => "range",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Create(Route),
    Push,
    Pop,
    Truncate(usize),
    Compact,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sample {
    pub index: usize,
    pub op: Op,
    pub len: usize,
    pub capacity: usize,
}

/// Drives a [`GrowVec`] and keeps one [`Sample`] per operation.
pub struct Recorder<T> {
    vec: GrowVec<T>,
    samples: GrowVec<Sample>,
    initial_capacity: usize,
}

impl<T> Recorder<T> {

    pub fn new(vec: GrowVec<T>) -> Self {
        let initial_capacity = vec.capacity();
        Self {
            vec,
            samples: GrowVec::new(),
            initial_capacity,
        }
    }

    /// Starts from an already filled vector, recording how it was built.
    pub fn created(vec: GrowVec<T>, route: Route) -> Result<Self, VecError> {
        let mut recorder = Self::new(vec);
        recorder.initial_capacity = 0;
        recorder.record(Op::Create(route), 0)?;
        Ok(recorder)
    }

    pub fn push(&mut self, value: T) -> Result<(), VecError> {
        let before = self.vec.capacity();
        self.vec.push(value)?;
        self.record(Op::Push, before)
    }

    pub fn pop(&mut self) -> Result<T, VecError> {
        let before = self.vec.capacity();
        let value = self.vec.pop()?;
        self.record(Op::Pop, before)?;
        Ok(value)
    }

    pub fn truncate(&mut self, len: usize) -> Result<(), VecError> {
        let before = self.vec.capacity();
        self.vec.truncate(len)?;
        self.record(Op::Truncate(len), before)
    }

    pub fn compact(&mut self) -> Result<(), VecError> {
        let before = self.vec.capacity();
        self.vec.shrink_to_fit()?;
        self.record(Op::Compact, before)
    }

    #[inline(always)]
    pub fn vec(&self) -> &GrowVec<T> {
        &self.vec
    }

    #[inline(always)]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Samples whose capacity differs from the one before them.
    pub fn transitions(&self) -> impl Iterator<Item = &Sample> {
        let mut last = self.initial_capacity;
        self.samples.iter().filter(move |sample| {
            let changed = sample.capacity != last;
            last = sample.capacity;
            changed
        })
    }

    pub fn into_inner(self) -> GrowVec<T> {
        self.vec
    }

    fn record(&mut self, op: Op, before: usize) -> Result<(), VecError> {
        let sample = Sample {
            index: self.samples.len(),
            op,
            len: self.vec.len(),
            capacity: self.vec.capacity(),
        };
        if sample.capacity != before {
            debug!("{:?}: capacity {} -> {} at len {}", op, before, sample.capacity, sample.len);
        }
        self.samples.push(sample)?;
        Ok(())
    }
}
