use crate::error::Result;
use crate::models::PriceReport;
use crate::scrapers::types::PriceLookup;
use async_trait::async_trait;

/// Common trait for commodity price sources
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch and normalize prices for a validated lookup
    async fn fetch(&self, lookup: &PriceLookup) -> Result<PriceReport>;

    /// Get the name of the price source
    fn source_name(&self) -> &'static str;
}
