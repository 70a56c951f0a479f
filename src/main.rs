use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter};
use theme_migrate::utils::logger;
use theme_migrate::{CliConfig, Migrator};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let migrator = Migrator::new().context("failed to build migration rules")?;
    tracing::debug!("Active rules: {:?}", migrator.rule_names());

    let stdin = io::stdin();
    let stdout = io::stdout();

    match migrator.run(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(stats) => {
            tracing::info!(
                "Migrated {} of {} lines",
                stats.lines_rewritten,
                stats.lines_read
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Migration failed: {}", e);
            Err(e).context("failed to migrate input")
        }
    }
}
