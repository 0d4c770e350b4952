use booking_server::{Config, Server, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment
    dotenv::dotenv().ok();

    // 2. Configuration
    let config = Config::from_env();

    // 3. Logging; the guard keeps the file writer alive
    let _log_guard = init_logger(&config.log_level, config.log_json, Some(&config.log_dir()));

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        work_dir = %config.work_dir,
        "Booking server starting"
    );

    // 4. Serve
    if let Err(e) = Server::new(config).run().await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    Ok(())
}
