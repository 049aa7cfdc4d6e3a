use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with an env-filter layer.
///
/// Embedders (CLI, HTTP edge, test harnesses) call this once at startup;
/// library code only emits `tracing` events and never installs a subscriber.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pixvault=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::debug!("Tracing initialized");
    Ok(())
}
