use stretch_mem::VecError;

#[derive(Debug)]
pub enum LogError {
    /// A [`CustomFmt`](crate::CustomFmt) handle minted by a different logger.
    UnknownFormat(usize),
    FormatStorage(VecError),
    IoError(std::io::Error),
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownFormat(index) => write!(f, "no custom log format at index {}", index),
            Self::FormatStorage(_) => write!(f, "failed to store log format"),
            Self::IoError(_) => write!(f, "IO error"),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::UnknownFormat(_) => None,
            Self::FormatStorage(err) => Some(err),
            Self::IoError(err) => Some(err),
        }
    }
}

impl From<VecError> for LogError {

    fn from(value: VecError) -> Self {
        Self::FormatStorage(value)
    }
}

impl<T> From<stretch_mem::PushError<T>> for LogError {

    fn from(value: stretch_mem::PushError<T>) -> Self {
        Self::FormatStorage(value.error)
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}
