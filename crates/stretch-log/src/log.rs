use std::{
    io,
    sync::{Mutex, MutexGuard, OnceLock},
};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

use rustc_hash::FxHashMap;

use compact_str::CompactString;

use stretch_mem::GrowVec;

use crate::*;

mod error;
pub mod fmt;

pub use error::LogError;
pub use fmt::{LogFmt, LogFmtBuilder, LogSpec, SegmentSpec};

/// Handle to a format registered with [`custom_fmt`].
///
/// A handle indexes the format list of the logger that minted it. Looking
/// it up in any other logger yields [`LogError::UnknownFormat`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CustomFmt(usize);

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl Level {

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "LOG",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// `steps` levels more verbose, saturating at [`Level::Trace`].
    pub fn raised(self, steps: u8) -> Self {
        let mut level = self;
        for _ in 0..steps {
            level = match level {
                Self::Always | Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
        }
        level
    }
}

pub enum LevelFmt {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Other(CustomFmt, Level),
}

impl LevelFmt {

    #[inline(always)]
    pub fn level(&self) -> Level {
        match self {
            Self::Error => Level::Error,
            Self::Warn => Level::Warn,
            Self::Info => Level::Info,
            Self::Debug => Level::Debug,
            Self::Trace => Level::Trace,
            Self::Other(_, level) => *level,
        }
    }
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

/// Per-target levels in `RUST_LOG` syntax: `level,target=level,...`.
#[derive(Clone, Debug)]
pub struct Filters {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Filters {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Filters {

    /// Unknown levels are skipped. A target listed twice keeps the quieter
    /// level.
    pub fn parse(spec: &str) -> Self {
        let mut filters = Self::default();
        for arg in spec.split(',') {
            let (module, level) = match arg.find('=') {
                Some(j) => (Some(arg[..j].trim()), arg[j + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match module {
                Some(module) => {
                    let entry = filters.target_levels
                        .entry(CompactString::new(module))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                None => filters.base_level = level,
            }
        }
        filters
    }

    pub fn from_env() -> Self {
        std::env::var("RUST_LOG")
            .map(|env| Self::parse(&env))
            .unwrap_or_default()
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// Most specific `::` prefix of `target` wins.
    pub fn level_for(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[0..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }
}

pub(crate) fn render<W: WriteColor + ?Sized>(
    out: &mut W,
    fmt: &LogFmt,
    level: Level,
    target: &str,
    msg: core::fmt::Arguments,
) -> io::Result<()>
{
    for segment in fmt {
        let spec = segment.spec();
        if let Some(color_spec) = &spec.color_spec {
            out.set_color(color_spec)?;
        }
        match segment {
            SegmentSpec::Message(_) => write!(out, "{}", msg)?,
            SegmentSpec::Level(_) => out.write_all(level.as_str().as_bytes())?,
            SegmentSpec::Target(_) => out.write_all(target.as_bytes())?,
            SegmentSpec::Text(text, _) => out.write_all(text.as_bytes())?,
        }
        if spec.color_spec.is_some() {
            out.reset()?;
        }
    }
    out.write_all(b"\n")
}

struct Logger {
    out: Box<dyn WriteColor + Send>,
    info_fmt: LogFmt,
    warn_fmt: LogFmt,
    error_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    custom_fmt: GrowVec<LogFmt>,
    filters: Filters,
}

impl Logger {

    fn new(filters: Filters) -> Self {
        Self::with_output(Box::new(StandardStream::stderr(ColorChoice::Auto)), filters)
    }

    fn with_output(out: Box<dyn WriteColor + Send>, filters: Filters) -> Self {
        Self {
            out,
            info_fmt: LogFmt::standard(Color::Green).unwrap_or_default(),
            warn_fmt: LogFmt::standard(Color::Yellow).unwrap_or_default(),
            error_fmt: LogFmt::standard(Color::Red).unwrap_or_default(),
            debug_fmt: LogFmt::standard(Color::Blue).unwrap_or_default(),
            trace_fmt: LogFmt::standard(Color::Cyan).unwrap_or_default(),
            custom_fmt: GrowVec::new(),
            filters,
        }
    }

    fn log(&mut self, target: &str, level: LevelFmt, msg: core::fmt::Arguments) -> Result<bool> {
        let record_level = level.level();
        if self.filters.level_for(target) < record_level {
            return Ok(false)
        }
        let fmt = match level {
            LevelFmt::Error => &self.error_fmt,
            LevelFmt::Warn => &self.warn_fmt,
            LevelFmt::Info => &self.info_fmt,
            LevelFmt::Debug => &self.debug_fmt,
            LevelFmt::Trace => &self.trace_fmt,
            LevelFmt::Other(CustomFmt(index), _) => {
                self.custom_fmt
                    .get(index)
                    .ok_or(LogError::UnknownFormat(index))?
            },
        };
        render(&mut *self.out, fmt, record_level, target, msg)?;
        Ok(true)
    }

    fn custom_fmt(&mut self, fmt: LogFmt) -> Result<CustomFmt> {
        let index = self.custom_fmt.len();
        self.custom_fmt.push(fmt)?;
        Ok(CustomFmt(index))
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn logger() -> MutexGuard<'static, Logger> {
    LOGGER
        .get_or_init(|| Mutex::new(Logger::new(Filters::from_env())))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Reads `RUST_LOG`. Calling it again, or after the first record, is a no-op.
pub fn init() {
    let _ = LOGGER.get_or_init(|| Mutex::new(Logger::new(Filters::from_env())));
}

/// Like [`init`] but with an explicit filter string instead of `RUST_LOG`.
pub fn init_with(spec: &str) {
    let _ = LOGGER.get_or_init(|| Mutex::new(Logger::new(Filters::parse(spec))));
}

pub fn set_base_level(level: Level) {
    logger().filters.base_level = level;
}

pub fn base_level() -> Level {
    logger().filters.base_level
}

pub fn enabled(target: &str, level: Level) -> bool {
    logger().filters.level_for(target) >= level
}

#[inline(always)]
pub fn error_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    let mut logger = logger();
    let mut builder = LogFmtBuilder::new(&mut logger.error_fmt);
    f(&mut builder)
}

#[inline(always)]
pub fn warn_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    let mut logger = logger();
    let mut builder = LogFmtBuilder::new(&mut logger.warn_fmt);
    f(&mut builder)
}

#[inline(always)]
pub fn info_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    let mut logger = logger();
    let mut builder = LogFmtBuilder::new(&mut logger.info_fmt);
    f(&mut builder)
}

#[inline(always)]
pub fn debug_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    let mut logger = logger();
    let mut builder = LogFmtBuilder::new(&mut logger.debug_fmt);
    f(&mut builder)
}

#[inline(always)]
pub fn trace_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<()> {
    let mut logger = logger();
    let mut builder = LogFmtBuilder::new(&mut logger.trace_fmt);
    f(&mut builder)
}

pub fn custom_fmt(fmt: LogFmt) -> Result<CustomFmt> {
    logger().custom_fmt(fmt)
}

#[inline(always)]
pub fn log(target: &str, level: LevelFmt, args: core::fmt::Arguments) -> Result<bool> {
    logger().log(target, level, args)
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::LevelFmt::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}
