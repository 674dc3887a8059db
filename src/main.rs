use axum::serve;
use catalog_filter::build_app;
use catalog_filter::config::AppConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    println!("Catalog Filter: product browsing API");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let catalog = config.load_catalog()?;
    log::info!(
        "Catalog ready: {} properties, {} operators, {} products",
        catalog.properties().len(),
        catalog.operators().len(),
        catalog.products().len()
    );

    run_server(build_app(catalog, &config), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Catalog server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
