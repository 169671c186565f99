use crate::utils::error::{PricingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative_age};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    pub fn is_one_of(self, days: &[DayOfWeek]) -> bool {
        days.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Accepts full names and three-letter abbreviations in any case.
impl FromStr for DayOfWeek {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        validate_non_empty_string("day", s)?;
        let normalized = s.trim().to_ascii_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == normalized || day.as_str()[..3] == normalized)
            .ok_or_else(|| {
                PricingError::invalid_argument("day", format!("unknown day of week `{}`", s.trim()))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub age: u32,
    pub day_of_week: DayOfWeek,
}

impl TicketRequest {
    pub fn new(age: u32, day_of_week: DayOfWeek) -> Self {
        Self { age, day_of_week }
    }

    /// Builds a request from untrusted input, rejecting negative ages.
    pub fn try_new(age: i64, day_of_week: DayOfWeek) -> Result<Self> {
        let age = validate_non_negative_age("age", age)?;
        Ok(Self::new(age, day_of_week))
    }

    pub fn for_date(age: u32, date: NaiveDate) -> Self {
        Self::new(age, date.weekday().into())
    }

    pub fn is_on_weekend(&self) -> bool {
        self.day_of_week.is_weekend()
    }

    pub fn is_on_day(&self, days: &[DayOfWeek]) -> bool {
        self.day_of_week.is_one_of(days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// How a price was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub request: TicketRequest,
    pub base_price: f64,
    pub child_discount_applied: bool,
    pub day_discount_rate: f64,
    pub price: Price,
}

/// One priced row of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedTicket {
    pub age: u32,
    pub day: DayOfWeek,
    pub price: Price,
}

impl From<&PriceQuote> for PricedTicket {
    fn from(quote: &PriceQuote) -> Self {
        Self {
            age: quote.request.age,
            day: quote.request.day_of_week,
            price: quote.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_of_week() {
        assert_eq!("Saturday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Saturday);
        assert_eq!(" tue ".parse::<DayOfWeek>().unwrap(), DayOfWeek::Tuesday);
        assert_eq!("SUN".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("funday".parse::<DayOfWeek>().is_err());
        assert!("".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_weekend_days() {
        let weekend: Vec<_> = DayOfWeek::ALL.into_iter().filter(|d| d.is_weekend()).collect();
        assert_eq!(weekend, vec![DayOfWeek::Saturday, DayOfWeek::Sunday]);
    }

    #[test]
    fn test_request_for_date_uses_weekday() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let request = TicketRequest::for_date(8, date);
        assert_eq!(request.day_of_week, DayOfWeek::Saturday);
        assert!(request.is_on_weekend());
    }

    #[test]
    fn test_try_new_rejects_negative_age() {
        assert!(TicketRequest::try_new(-3, DayOfWeek::Monday).is_err());
        assert_eq!(
            TicketRequest::try_new(10, DayOfWeek::Monday).unwrap(),
            TicketRequest::new(10, DayOfWeek::Monday)
        );
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = serde_json::to_string(&Price::new(25.0)).unwrap();
        assert_eq!(json, "25.0");
        assert_eq!(Price::new(30.0).to_string(), "30.00");
    }
}
