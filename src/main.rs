use pointage::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The message macros route through tracing only in debug mode, so the
    // subscriber is only installed when one of the switches is set.
    if std::env::var("POINTAGE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Cli::menu().await
}
