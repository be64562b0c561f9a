use std::error::Error;
use traq::commands::Cli;
use traq::libs::messages::macros::is_debug_mode;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if is_debug_mode() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Cli::menu().await
}
