use anyhow::{Context, Result};
use mandi_prices::scrapers::{NapantaScraper, PriceSource};
use mandi_prices::server::build_app;
use mandi_prices::{logging, Config};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init();

    info!("🌾 Sewa Mandi - commodity price service");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Price source: {} (timeout {:?})",
        config.scraper.base_url, config.scraper.timeout
    );

    let scraper = NapantaScraper::new(&config.scraper)?;
    let source_name = scraper.source_name();
    let app = build_app(Arc::new(scraper));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Serving {} prices on http://{}", source_name, addr);
    info!("Price lookup: http://{}/price?state=punjab&commodity=wheat", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
