use agecalc::cli::Cli;
use agecalc::logger;
use agecalc::{AgeForm, Config, LogNotifier, Notifier};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => Config::default(),
    };

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(%today, min_birth_date = %config.min_birth_date, "Starting age calculation");

    // Keep stdout clean for JSON output.
    let mut notifier: Box<dyn Notifier> = if cli.json {
        Box::new(LogNotifier)
    } else {
        config.notifier.build()
    };

    let mut form = AgeForm::new(config.min_birth_date);
    let report = form.submit(cli.dob.as_deref(), today, notifier.as_mut())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    }

    Ok(())
}
