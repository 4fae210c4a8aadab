use stockroom_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Stockroom catalog server starting...");

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);

    server.run().await
}
