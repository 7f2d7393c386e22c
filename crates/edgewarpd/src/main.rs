//! edgewarpd entry point.
//!
//! Wires configuration, the output registry, and the synchronizer, and
//! parks the process until shutdown.  The platform display-server event
//! source (pointer motion sampling, topology-change notifications, warp
//! requests) mounts onto the ports defined in the application layer; the
//! headless variant built here runs from the fixed output list in the
//! config file.

use tracing::info;
use tracing_subscriber::EnvFilter;

use edgewarp_core::{Output, OutputRegistry};
use edgewarpd::application::sync_outputs::OutputSynchronizer;
use edgewarpd::infrastructure::storage::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.daemon.log_level.clone())),
        )
        .init();

    info!("edgewarpd starting");

    if cfg.outputs.is_empty() {
        anyhow::bail!(
            "no display-server adapter is compiled into this build; \
             add [[outputs]] entries to {} to run with a fixed output list",
            config::config_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string())
        );
    }

    let fixed: Vec<Output> = cfg.outputs.iter().map(config::OutputEntry::to_output).collect();
    let mut synchronizer = OutputSynchronizer::fixed(fixed);

    let mut registry = OutputRegistry::new();
    synchronizer.refresh(&mut registry)?;
    if registry.is_empty() {
        anyhow::bail!("all configured outputs were rejected, nothing to work with");
    }

    for output in registry.iter() {
        info!(
            "output {}: {} / {} / {} / {}",
            output.id, output.rect.x, output.rect.y, output.rect.width, output.rect.height
        );
    }

    info!(
        "edgewarpd ready with {} outputs (wrap = {}).  Press Ctrl-C to exit.",
        registry.len(),
        cfg.warp.wrap
    );

    // The display-server event loop would drive EdgeWatcher::observe here
    // with sampled pointer positions every poll_interval_ms.
    tokio::signal::ctrl_c().await?;

    info!("edgewarpd stopped");
    Ok(())
}
