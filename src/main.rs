use anyhow::Context;
use clap::Parser;
use prime_counter::config::Config;
use prime_counter::prime::PrimeVerdict;
use prime_counter::{logging, ui};
use std::path::PathBuf;

/// Counter demo with an "Is this prime?" check.
#[derive(Debug, Parser)]
#[command(name = "prime-counter", version, about)]
struct Cli {
    /// Config file path (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// UI tick rate in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    tick_rate_ms: Option<u64>,

    /// Print whether N is prime and exit without starting the UI
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    check: Option<i64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(n) = cli.check {
        println!("{}", PrimeVerdict::judge(n));
        return Ok(());
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.ui.tick_rate_ms = tick_rate_ms;
    }

    logging::init(&config.logging).context("initializing logging")?;
    tracing::info!(config = %config_path.display(), "starting");

    ui::run(&config.ui).context("running terminal UI")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["prime-counter", "--check", "-7"]).unwrap();
        assert_eq!(cli.check, Some(-7));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        assert!(Cli::try_parse_from(["prime-counter", "--tick-rate-ms", "0"]).is_err());
    }
}
