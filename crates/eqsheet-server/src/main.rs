use eqsheet_server::config::ServerConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // A missing .env file is fine; settings then come from the environment.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    eqsheet_server::init_tracing(config.log_format);

    eqsheet_server::serve(config).await
}
