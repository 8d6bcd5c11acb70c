use crate::config::ScraperConfig;
use crate::error::Result;
use crate::models::PriceReport;
use crate::scrapers::table::parse_price_table;
use crate::scrapers::traits::PriceSource;
use crate::scrapers::types::PriceLookup;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

/// The upstream site lists Punjab-wide prices under the state path;
/// a market segment of "punjab" must not be added.
const STATEWIDE_MANDI: &str = "punjab";

/// Scraper for the agri-commodity price pages on NaPanta
pub struct NapantaScraper {
    client: Client,
    base_url: String,
}

impl NapantaScraper {
    /// Create a new scraper from the price source configuration
    pub fn new(config: &ScraperConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the page URL for a lookup
    pub fn lookup_url(&self, lookup: &PriceLookup) -> String {
        let state = urlencoding::encode(&lookup.state);
        let commodity = urlencoding::encode(&lookup.commodity);

        match lookup.mandi.as_deref() {
            Some(mandi) if mandi != STATEWIDE_MANDI => format!(
                "{}/agri-commodity-prices/{}/{}/{}/",
                self.base_url,
                state,
                urlencoding::encode(mandi),
                commodity
            ),
            _ => format!(
                "{}/agri-commodity-prices/{}/{}/",
                self.base_url, state, commodity
            ),
        }
    }
}

#[async_trait]
impl PriceSource for NapantaScraper {
    async fn fetch(&self, lookup: &PriceLookup) -> Result<PriceReport> {
        let url = self.lookup_url(lookup);

        info!(
            "Fetching {} prices for {} (mandi: {})",
            lookup.commodity,
            lookup.state,
            lookup.mandi.as_deref().unwrap_or("-")
        );
        debug!("Fetching URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request to price source failed: {}", e);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Price source returned status {} for {}", status, url);
            return Ok(PriceReport::empty(&lookup.state, &lookup.commodity));
        }

        let html = response.text().await?;
        debug!("Downloaded {} bytes of HTML", html.len());

        let prices = parse_price_table(&html);
        if prices.is_empty() {
            warn!("No price rows found at {}", url);
        } else {
            info!("Parsed {} price rows", prices.len());
        }

        Ok(PriceReport::new(&lookup.state, &lookup.commodity, prices))
    }

    fn source_name(&self) -> &'static str {
        "NaPanta"
    }
}
