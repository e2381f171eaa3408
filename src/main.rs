use arith_jsonrpc::{config::Config, logging, serve_stdio, AppError};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logging::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_format = ?config.log_format,
        "server starting"
    );

    serve_stdio().await?;
    Ok(())
}
