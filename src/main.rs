mod shutdown;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting Brody");

    // Load configuration
    let config = startup::load_config().await?;

    // Run the terminal view
    startup::start_app(config).await
}
