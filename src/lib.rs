pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{toml_config::TariffConfig, OutputFormat};
pub use crate::core::{
    batch::CsvBatchPipeline,
    calculator::{calculate_ticket_price, TicketPriceCalculator},
    engine::{BatchPricer, BatchSummary},
    tariff::Tariff,
};
pub use crate::domain::model::{DayOfWeek, Price, PriceQuote, PricedTicket, TicketRequest};
pub use crate::domain::ports::PriceCalculator;
pub use crate::utils::error::{PricingError, Result};
