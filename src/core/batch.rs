use crate::config::OutputFormat;
use crate::domain::model::{DayOfWeek, PricedTicket, TicketRequest};
use crate::domain::ports::{Pipeline, PriceCalculator, Storage};
use crate::utils::error::{PricingError, Result};
use crate::utils::validation::validate_non_negative_age;
use chrono::NaiveDate;
use serde::Deserialize;

/// Raw input row; either `day` or `date` identifies the screening.
#[derive(Debug, Deserialize)]
struct RequestRow {
    age: i64,
    #[serde(default)]
    day: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

impl RequestRow {
    /// `line` is the 1-based data row number, used in error messages.
    fn into_request(self, line: usize) -> Result<TicketRequest> {
        let row_error = |field: &str, e: PricingError| match e {
            PricingError::InvalidArgument { reason, .. } => {
                PricingError::invalid_argument(format!("row {} {}", line, field), reason)
            }
            other => other,
        };

        let age = validate_non_negative_age("age", self.age).map_err(|e| row_error("age", e))?;

        let from_day = non_blank(self.day)
            .map(|d| d.parse::<DayOfWeek>())
            .transpose()
            .map_err(|e| row_error("day", e))?;

        let from_date = non_blank(self.date)
            .map(|d| {
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map(|date| TicketRequest::for_date(age, date).day_of_week)
                    .map_err(|e| {
                        PricingError::invalid_argument(
                            format!("row {} date", line),
                            format!("`{}` is not a YYYY-MM-DD date: {}", d.trim(), e),
                        )
                    })
            })
            .transpose()?;

        let day_of_week = match (from_day, from_date) {
            (Some(day), Some(date_day)) if day != date_day => {
                return Err(PricingError::invalid_argument(
                    format!("row {} date", line),
                    format!("date falls on a {} but day says {}", date_day, day),
                ))
            }
            (Some(day), _) | (None, Some(day)) => day,
            (None, None) => {
                return Err(PricingError::invalid_argument(
                    format!("row {}", line),
                    "either `day` or `date` is required",
                ))
            }
        };

        Ok(TicketRequest::new(age, day_of_week))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn parse_requests(data: &[u8]) -> Result<Vec<TicketRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    reader
        .deserialize::<RequestRow>()
        .enumerate()
        .map(|(index, row)| row?.into_request(index + 1))
        .collect()
}

pub fn render_tickets(tickets: &[PricedTicket], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for ticket in tickets {
                writer.serialize(ticket)?;
            }
            writer
                .into_inner()
                .map_err(|e| PricingError::IoError(e.into_error()))
        }
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(tickets)?),
    }
}

/// Reads requests from a CSV file, prices them and writes the results.
pub struct CsvBatchPipeline<S: Storage, C: PriceCalculator> {
    storage: S,
    calculator: C,
    input_path: String,
    output_path: String,
    format: OutputFormat,
}

impl<S: Storage, C: PriceCalculator> CsvBatchPipeline<S, C> {
    pub fn new(
        storage: S,
        calculator: C,
        input_path: impl Into<String>,
        output_path: impl Into<String>,
        format: OutputFormat,
    ) -> Self {
        Self {
            storage,
            calculator,
            input_path: input_path.into(),
            output_path: output_path.into(),
            format,
        }
    }
}

impl<S: Storage, C: PriceCalculator> Pipeline for CsvBatchPipeline<S, C> {
    fn extract(&self) -> Result<Vec<TicketRequest>> {
        let data = self.storage.read_file(&self.input_path)?;
        parse_requests(&data)
    }

    fn transform(&self, requests: Vec<TicketRequest>) -> Vec<PricedTicket> {
        requests
            .iter()
            .map(|request| PricedTicket::from(&self.calculator.quote(request)))
            .collect()
    }

    fn load(&self, tickets: &[PricedTicket]) -> Result<String> {
        let data = render_tickets(tickets, self.format)?;
        self.storage.write_file(&self.output_path, &data)?;
        Ok(self.output_path.clone())
    }
}
