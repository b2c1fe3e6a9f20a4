mod config;
mod report;

use clap::Parser;
use config::{CliArgs, Config, SourceKind};
use hwrand::{EntropySource, Result, SystemRandom};
use report::{FAILURE_MESSAGE, success_line};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_logging();
    tracing::debug!(
        source = config.source.as_str(),
        bytes = config.bytes,
        attempts = config.attempts,
        "starting acquisition"
    );

    let mut sample = vec![0u8; config.bytes];
    match acquire(&config, &mut sample) {
        Ok(()) => {
            tracing::debug!(source = config.source.as_str(), "sample acquired");
            println!("{}", success_line(&sample));
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "acquisition failed");
            eprintln!("{FAILURE_MESSAGE}");
            std::process::exit(1);
        }
    }
}

/// One acquisition against the configured source. The sample buffer is
/// either fully populated on `Ok` or must not be interpreted on `Err`.
fn acquire(config: &Config, dest: &mut [u8]) -> Result<()> {
    match config.source {
        SourceKind::System => SystemRandom.fill(dest),
        #[cfg(target_arch = "x86_64")]
        SourceKind::Rdrand => {
            hwrand::HardwareRandom::with_attempts(hwrand::HwInstruction::Rdrand, config.attempts)
                .fill(dest)
        }
        #[cfg(target_arch = "x86_64")]
        SourceKind::Rdseed => {
            hwrand::HardwareRandom::with_attempts(hwrand::HwInstruction::Rdseed, config.attempts)
                .fill(dest)
        }
        // Rejected during config validation.
        #[cfg(not(target_arch = "x86_64"))]
        SourceKind::Rdrand | SourceKind::Rdseed => Err(hwrand::EntropyError::Unavailable {
            source_name: config.source.as_str(),
        }),
    }
}

// Diagnostics go to stderr so stdout carries only the result line.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
