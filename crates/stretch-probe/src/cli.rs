use clap::{Parser, Subcommand, ValueEnum};

use stretch_mem::{HalfOccupancy, VecError};

use crate::settings::{ProbeSettings, GrowthChoice, ShrinkChoice};

#[derive(Parser, Debug)]
#[command(name = "stretch-probe")]
#[command(version, about = "Tabulates how a growable array reserves and releases capacity", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of elements pushed or built
    #[arg(short, long, global = true, default_value_t = ProbeSettings::DEFAULT_COUNT)]
    pub count: usize,

    /// Length kept before compaction
    #[arg(short, long, global = true, default_value_t = ProbeSettings::DEFAULT_KEEP)]
    pub keep: usize,

    /// Comma separated truncation points for the shrink table
    #[arg(
        short, long, global = true,
        value_delimiter = ',',
        default_values_t = ProbeSettings::DEFAULT_POINTS,
    )]
    pub points: Vec<usize>,

    /// Growth policy
    #[arg(short, long, global = true, value_enum, default_value_t = GrowthArg::Overallocate)]
    pub growth: GrowthArg,

    /// Shrink policy
    #[arg(short, long, global = true, value_enum, default_value_t = ShrinkArg::Never)]
    pub shrink: ShrinkArg,

    /// Slack factor of the half occupancy shrink policy
    #[arg(long, global = true, default_value_t = HalfOccupancy::DEFAULT_SLACK)]
    pub slack: f64,

    /// Set verbose level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Command {
    /// Capacity transitions while pushing
    Growth,
    /// Capacity per construction route
    Creation,
    /// Capacity left after truncation
    Shrink,
    /// Capacity after each compaction method
    Compact,
    /// Every table
    #[default]
    All,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GrowthArg {
    Overallocate,
    Doubling,
    Exact,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShrinkArg {
    Never,
    Half,
    Mirror,
}

impl Cli {

    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[inline(always)]
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }

    pub fn settings(&self) -> Result<ProbeSettings, VecError> {
        let growth = match self.growth {
            GrowthArg::Overallocate => GrowthChoice::Overallocate,
            GrowthArg::Doubling => GrowthChoice::Doubling,
            GrowthArg::Exact => GrowthChoice::Exact,
        };
        let shrink = match self.shrink {
            ShrinkArg::Never => ShrinkChoice::Never,
            ShrinkArg::Half => ShrinkChoice::Half(HalfOccupancy::new(self.slack)?),
            ShrinkArg::Mirror => ShrinkChoice::Mirror,
        };
        Ok(ProbeSettings::new(
            self.count,
            self.keep,
            self.points.clone(),
            growth,
            shrink,
            self.verbose,
        ))
    }
}
