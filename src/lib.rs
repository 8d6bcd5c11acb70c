pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod scrapers;
pub mod server;

pub use config::Config;
pub use error::{PriceError, Result};
