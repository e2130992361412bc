use anyhow::Context;
use clap::Parser;

use giveaway_picker::cli::Cli;
use giveaway_picker::headless::run_headless;
use giveaway_picker::logging::{init_tracing, LogTarget};
use giveaway_picker::shutdown::ShutdownHandle;
use giveaway_picker::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load config")?;

    let target = LogTarget::for_mode(&config.logging, cli.headless);
    init_tracing(&config.logging, &target).context("failed to initialize logging")?;

    let registry = cli.registry().context("failed to read names file")?;
    tracing::info!(
        participants = registry.count(),
        interval_ms = config.picker.shuffle_interval_ms,
        duration_ms = config.picker.shuffle_duration_ms,
        "config loaded"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let shutdown = ShutdownHandle::new();

    if cli.headless {
        return tokio_runtime.block_on(run_headless(&registry, &config, cli.export, shutdown));
    }

    runtime::run(&config, registry, tokio_runtime.handle().clone(), shutdown)
        .context("terminal UI failed")?;
    // Timer tasks are aborted with the engine; do not wait on stragglers.
    tokio_runtime.shutdown_background();
    Ok(())
}
