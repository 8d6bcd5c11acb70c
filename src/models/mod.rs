use serde::Serialize;

/// One normalized row of the upstream price table.
///
/// Values are kept as the text shown on the page; `avg` keeps whatever
/// currency notation the source uses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PriceRecord {
    pub date: Option<String>,
    pub mandi: Option<String>,
    pub avg: Option<String>,
}

/// Result of a single price lookup
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PriceReport {
    pub state: String,
    pub commodity: String,
    pub prices: Vec<PriceRecord>,
}

impl PriceReport {
    pub fn new(state: &str, commodity: &str, prices: Vec<PriceRecord>) -> Self {
        Self {
            state: state.to_string(),
            commodity: commodity.to_string(),
            prices,
        }
    }

    /// Report with no prices, used when the upstream page is unusable
    pub fn empty(state: &str, commodity: &str) -> Self {
        Self::new(state, commodity, Vec::new())
    }
}
