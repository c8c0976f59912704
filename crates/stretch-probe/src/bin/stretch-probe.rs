use std::io::{self, Write};

use stretch_probe::{
    AnyError, Context,
    cli::Cli,
    run::run,
};

fn main() -> Result<(), AnyError> {
    stretch_log::init();
    let cli = Cli::parse_args();
    let settings = cli.settings().ctx_err("invalid probe settings")?;
    if settings.verbosity > 0 {
        stretch_log::set_base_level(stretch_log::base_level().raised(settings.verbosity));
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&settings, cli.command(), &mut out)?;
    out.flush().ctx_err("flushing stdout")
}
