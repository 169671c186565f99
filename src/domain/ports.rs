use crate::domain::model::{PriceQuote, PricedTicket, TicketRequest};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait PriceCalculator: Send + Sync {
    fn quote(&self, request: &TicketRequest) -> PriceQuote;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<TicketRequest>>;
    fn transform(&self, requests: Vec<TicketRequest>) -> Vec<PricedTicket>;
    fn load(&self, tickets: &[PricedTicket]) -> Result<String>;
}
