use mini_servers::{echo, logging, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();
    let config = ServerConfig::from_env()?;
    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("echo server listening on {}", listener.local_addr()?);
    echo::run(listener, &config).await?;
    Ok(())
}
