use core::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum VecError {
    InvalidArgument {
        requested: usize,
        len: usize,
    },
    InvalidSlack {
        slack: f64,
    },
    EmptyContainer,
    PolicyViolation {
        required: usize,
        returned: usize,
    },
    AllocFailed {
        new_capacity: usize,
    },
    ZeroSizedElement,
}

impl Display for VecError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { requested, len } => {
                write!(f, "requested length {} exceeds current length {}", requested, len)
            },
            Self::InvalidSlack { slack } => {
                write!(f, "shrink slack {} is outside [1.0, 1.2]", slack)
            },
            Self::EmptyContainer => {
                write!(f, "container is empty")
            },
            Self::PolicyViolation { required, returned } => {
                write!(f, "capacity policy returned {} when at least {} was required", returned, required)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for VecError {}

/// Failed [`push`](crate::GrowVec::push). Hands the rejected value back.
pub struct PushError<T> {
    pub value: T,
    pub error: VecError,
}

impl<T> PushError<T> {

    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    #[inline(always)]
    pub fn error(&self) -> VecError {
        self.error
    }
}

impl<T> Debug for PushError<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> Display for PushError<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "push rejected: {}", self.error)
    }
}

impl<T> core::error::Error for PushError<T> {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PushError<T>> for VecError {

    fn from(value: PushError<T>) -> Self {
        value.error
    }
}
