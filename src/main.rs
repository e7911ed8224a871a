use sayhi_server::{greeting_routes, init_logging, RouterExt, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    init_logging();

    greeting_routes()
        .with_default_layers()
        .serve(&config)
        .await?;

    Ok(())
}
