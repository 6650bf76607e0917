//! Command handler

use convoy_app::config::Config;
use convoy_app::pipeline;
use convoy_types::Result;

use crate::cli::Cli;
use crate::output::print_report;

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::resolve(cli.config.as_deref(), &cli.input)?;
    if cli.scoring {
        config.scoring = true;
    }
    if let Some(sheet) = cli.sheet {
        config.sheet_name = sheet;
    }

    let report = pipeline::run(&cli.input, &config)?;
    print_report(cli.format, &report)
}
