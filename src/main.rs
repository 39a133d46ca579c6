//! Outreach Composer - Main entry point
//!
//! Reads the input paths and output options from the environment, runs one
//! generation and writes the resulting CSV artifacts to the output directory.

use anyhow::Result;
use outreach_composer::{
    Config, FileInputSource, FileOutputSink, RunOptions, RunService, TracingStatusReporter,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut rng = match config.rng_seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let service = RunService::new(
        Arc::new(FileInputSource::from_config(&config)),
        Arc::new(FileOutputSink::new(config.output_dir.clone())),
        Arc::new(TracingStatusReporter),
        RunOptions::from_config(&config),
    );

    let summary = service.run(&mut rng).await?;
    for artifact in &summary.artifacts {
        println!("{}", artifact);
    }

    Ok(())
}
