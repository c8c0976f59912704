pub mod cli;
pub mod error;
pub mod settings;
pub mod recorder;
pub mod scenario;
pub mod report;
pub mod run;

pub use error::{AnyError, Context};
pub use settings::{ProbeSettings, GrowthChoice, ShrinkChoice};
pub use recorder::{Recorder, Sample, Op, Route};

pub type Result<T> = core::result::Result<T, AnyError>;
