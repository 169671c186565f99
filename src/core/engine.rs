use crate::domain::model::Price;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub tickets: usize,
    pub total_revenue: Price,
    pub output_path: String,
    pub elapsed: Duration,
}

pub struct BatchPricer<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchPricer<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<BatchSummary> {
        let start = Instant::now();
        tracing::info!("Starting batch pricing");

        let requests = self.pipeline.extract()?;
        tracing::info!("Read {} ticket requests", requests.len());

        let tickets = self.pipeline.transform(requests);
        let total_revenue: f64 = tickets.iter().map(|t| t.price.amount()).sum();
        tracing::info!(
            "Priced {} tickets, total revenue {:.2}",
            tickets.len(),
            total_revenue
        );

        let output_path = self.pipeline.load(&tickets)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(BatchSummary {
            tickets: tickets.len(),
            total_revenue: Price::new(total_revenue),
            output_path,
            elapsed: start.elapsed(),
        })
    }
}
