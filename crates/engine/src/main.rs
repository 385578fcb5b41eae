//! Patternsmith - Main entry point.

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use patternsmith_engine::demo;
use patternsmith_engine::infrastructure::{
    load_dotenv, EngineSettings, FileLogStore, Logger, WriterSink,
};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    // Loaded before the subscriber so `RUST_LOG` may come from `.env`.
    let dotenv = load_dotenv(&Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(".."));

    // Initialize logging; stdout is reserved for demo output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "patternsmith_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = dotenv {
        tracing::warn!(error = %format!("{e:#}"), "Failed to load env file");
    }

    tracing::info!("Starting Patternsmith");

    let settings = EngineSettings::from_env();
    tracing::info!(
        log_file = %settings.log_file.display(),
        log_level = %settings.log_level,
        lenient = settings.log_lenient,
        "Logger configured"
    );

    // The one logger for this process; handed down explicitly.
    let mut logger = Logger::new(FileLogStore::new(&settings.log_file))
        .with_level(settings.log_level)
        .with_policy(settings.failure_policy());

    let mut console = WriterSink::stdout();
    demo::run(&mut logger, &settings.log_file, &mut console).context("demo run failed")?;

    Ok(())
}
