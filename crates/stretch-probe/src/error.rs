//! [`AnyError`] and the [`Context`] extension for attaching a description to
//! any error on its way out of the probe.

use core::{
    error,
    fmt::{self, Display, Debug, Formatter},
};

use compact_str::CompactString;

pub struct AnyError {
    desc: CompactString,
    err: Option<Box<dyn error::Error + Send + Sync>>,
}

impl AnyError {

    pub fn new(desc: impl AsRef<str>, err: impl error::Error + Send + Sync + 'static) -> Self {
        Self {
            desc: CompactString::new(desc),
            err: Some(Box::new(err)),
        }
    }

    pub fn just_context(desc: impl AsRef<str>) -> Self {
        Self {
            desc: CompactString::new(desc),
            err: None,
        }
    }

    #[inline(always)]
    pub fn description(&self) -> &str {
        &self.desc
    }
}

impl Debug for AnyError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.desc)?;
        let mut source = error::Error::source(self);
        while let Some(err) = source {
            write!(f, "\n  caused by: {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Display for AnyError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.desc)
    }
}

impl error::Error for AnyError {

    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.err
            .as_deref()
            .map(|err| err as &(dyn error::Error + 'static))
    }
}

pub trait Context<T, E: error::Error + Send + Sync + 'static> {

    fn ctx_err(self, ctx: impl AsRef<str>) -> Result<T, AnyError>;

    fn ctx_err_with<C: AsRef<str>>(self, f: impl FnOnce() -> C) -> Result<T, AnyError>;
}

impl<T, E: error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {

    fn ctx_err(self, ctx: impl AsRef<str>) -> Result<T, AnyError> {
        self.map_err(|err| AnyError::new(ctx, err))
    }

    fn ctx_err_with<C: AsRef<str>>(self, f: impl FnOnce() -> C) -> Result<T, AnyError> {
        self.map_err(|err| AnyError::new(f(), err))
    }
}
