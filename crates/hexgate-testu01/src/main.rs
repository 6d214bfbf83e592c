#![doc = include_str!("../README.md")]

mod config;
mod harness;
mod telemetry;

use std::io;

use clap::Parser;
use config::{CliArgs, GatewayConfig};
use hexgate::StreamRng;
use telemetry::init_telemetry;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = GatewayConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let mut rng = StreamRng::new(io::stdin().lock(), config.adapter_config());
    harness::run_battery(config.battery, &mut rng)?;

    tracing::info!(
        name = rng.name(),
        served = rng.served(),
        refills = rng.refills(),
        "Battery finished"
    );
    Ok(())
}

fn log_startup_info(config: &GatewayConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting gateway with full config: {:#?}", config);
    } else {
        tracing::info!(
            "Starting {} on {} ({} words per read, reverse bits: {})",
            config.battery,
            config.name,
            config.buffer_words,
            config.reverse_bits
        );
    }
}
