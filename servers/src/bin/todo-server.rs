use mini_servers::{logging, todo, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();
    let config = ServerConfig::from_env()?;
    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("todo server listening on {}", listener.local_addr()?);
    todo::run(listener, &config).await?;
    Ok(())
}
