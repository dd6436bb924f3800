use std::io;

use tokio::net::TcpListener;
use todo_server::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    todo_server::telemetry::init(&config.log_filter);

    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "listening");
    todo_server::run(listener).await
}
