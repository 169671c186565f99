pub mod batch;
pub mod calculator;
pub mod engine;
pub mod tariff;

pub use crate::domain::model::{DayOfWeek, Price, PriceQuote, PricedTicket, TicketRequest};
pub use crate::domain::ports::{Pipeline, PriceCalculator, Storage};
pub use crate::utils::error::Result;
