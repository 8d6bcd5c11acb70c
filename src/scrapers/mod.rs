pub mod napanta;
pub mod table;
pub mod traits;
pub mod types;

pub use napanta::NapantaScraper;
pub use traits::PriceSource;
pub use types::{PriceLookup, PriceQuery};
