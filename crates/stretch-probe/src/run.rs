use std::io::Write;

use stretch_log::info;

use crate::{
    Result, Context,
    cli::Command,
    settings::ProbeSettings,
    scenario, report,
};

/// Elements per construction route in the creation table.
pub const CREATION_LEN: usize = 3;

pub fn run(settings: &ProbeSettings, command: Command, out: &mut impl Write) -> Result<()> {
    info!("running {:?}", command);
    match command {
        Command::Growth => growth(settings, out),
        Command::Creation => creation(settings, out),
        Command::Shrink => shrink(settings, out),
        Command::Compact => compact(settings, out),
        Command::All => {
            growth(settings, out)?;
            creation(settings, out)?;
            shrink(settings, out)?;
            compact(settings, out)
        },
    }
}

fn growth(settings: &ProbeSettings, out: &mut impl Write) -> Result<()> {
    let data = scenario::growth(settings)?;
    report::growth(out, &data, settings.growth.name())
        .ctx_err("writing growth table")
}

fn creation(settings: &ProbeSettings, out: &mut impl Write) -> Result<()> {
    let rows = scenario::creation(settings, CREATION_LEN)?;
    report::creation(out, &rows)
        .ctx_err("writing creation table")
}

fn shrink(settings: &ProbeSettings, out: &mut impl Write) -> Result<()> {
    let data = scenario::shrink(settings)?;
    report::shrink(out, &data)
        .ctx_err("writing shrink table")
}

fn compact(settings: &ProbeSettings, out: &mut impl Write) -> Result<()> {
    let data = scenario::compaction(settings)?;
    report::compaction(out, &data)
        .ctx_err("writing compaction table")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(settings: &ProbeSettings, command: Command) -> String {
        let mut buf = Vec::new();
        run(settings, command, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_section() {
        let text = output(&ProbeSettings::default(), Command::Growth);
        assert!(text.contains("= Growth ="));
        assert!(!text.contains("= Shrink ="));
    }

    #[test]
    fn all_sections_in_order() {
        let text = output(&ProbeSettings::default(), Command::All);
        let positions: Vec<_> = ["= Growth =", "= Construction routes =", "= Shrink =", "= Compaction ="]
            .iter()
            .map(|title| text.find(title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn scenario_errors_propagate() {
        let settings = ProbeSettings::default().with_keep(500);
        let mut buf = Vec::new();
        let err = run(&settings, Command::Compact, &mut buf).unwrap_err();
        assert_eq!(err.to_string(), "keep count 500 exceeds element count 100");
    }
}
