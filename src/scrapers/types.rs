use crate::error::{PriceError, Result};
use serde::Deserialize;

/// Raw price query as it arrives at the boundary
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceQuery {
    pub state: Option<String>,
    pub commodity: Option<String>,
    /// Market name, optional
    pub mandi: Option<String>,
}

/// Validated lookup parameters: trimmed, lower-cased and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLookup {
    pub state: String,
    pub commodity: String,
    pub mandi: Option<String>,
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

impl PriceQuery {
    pub fn new(state: &str, commodity: &str, mandi: Option<&str>) -> Self {
        Self {
            state: Some(state.to_string()),
            commodity: Some(commodity.to_string()),
            mandi: mandi.map(str::to_string),
        }
    }

    /// Normalize the query, reporting every missing required field at once.
    pub fn validate(&self) -> Result<PriceLookup> {
        let state = normalize(self.state.as_deref());
        let commodity = normalize(self.commodity.as_deref());

        match (state, commodity) {
            (Some(state), Some(commodity)) => Ok(PriceLookup {
                state,
                commodity,
                mandi: normalize(self.mandi.as_deref()),
            }),
            (state, commodity) => {
                let mut missing = Vec::new();
                if state.is_none() {
                    missing.push("state");
                }
                if commodity.is_none() {
                    missing.push("commodity");
                }
                Err(PriceError::MissingParameter(missing))
            }
        }
    }
}
