//! Cadastro Server - HTTP REST API for CPF registration records

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env file; real environment variables win
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
