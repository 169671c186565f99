use crate::core::tariff::Tariff;
use crate::domain::model::{DayOfWeek, Price, PriceQuote, TicketRequest};
use crate::domain::ports::PriceCalculator;

const DISCOUNT_DAYS: [DayOfWeek; 2] = [DayOfWeek::Tuesday, DayOfWeek::Wednesday];
const NO_DISCOUNT: f64 = 0.0;
/// Absorbs binary representation error, far below any real currency fraction.
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Prices tickets against a [`Tariff`].
///
/// The child discount halves the base price first, the day-of-week discount
/// is then applied to that adjusted base, and the result is rounded up once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TicketPriceCalculator {
    tariff: Tariff,
}

impl TicketPriceCalculator {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn calculate_ticket_price(&self, request: &TicketRequest) -> Price {
        self.quote(request).price
    }

    fn base_price(&self, request: &TicketRequest) -> f64 {
        if request.is_on_weekend() {
            self.tariff.weekend_base_price
        } else {
            self.tariff.weekday_base_price
        }
    }

    fn is_child_discounted(&self, request: &TicketRequest) -> bool {
        request.is_on_weekend() && request.age < self.tariff.max_child_age
    }

    fn day_discount_rate(&self, request: &TicketRequest) -> f64 {
        if request.is_on_day(&DISCOUNT_DAYS) {
            self.tariff.day_discount_rate
        } else {
            NO_DISCOUNT
        }
    }
}

impl PriceCalculator for TicketPriceCalculator {
    fn quote(&self, request: &TicketRequest) -> PriceQuote {
        let base_price = self.base_price(request);
        let child_discount_applied = self.is_child_discounted(request);
        let adjusted_base = if child_discount_applied {
            base_price * (1.0 - self.tariff.child_discount_rate)
        } else {
            base_price
        };
        let day_discount_rate = self.day_discount_rate(request);
        let price = Price::new(round_up(adjusted_base * (1.0 - day_discount_rate)));

        tracing::debug!(
            age = request.age,
            day = %request.day_of_week,
            base_price,
            child_discount_applied,
            day_discount_rate,
            price = price.amount(),
            "priced ticket"
        );

        PriceQuote {
            request: *request,
            base_price,
            child_discount_applied,
            day_discount_rate,
            price,
        }
    }
}

/// Ceiling to the next whole currency unit.
fn round_up(amount: f64) -> f64 {
    if amount <= ROUNDING_TOLERANCE {
        return 0.0;
    }
    (amount - ROUNDING_TOLERANCE).ceil()
}

/// Prices a request with the default tariff.
pub fn calculate_ticket_price(request: &TicketRequest) -> Price {
    TicketPriceCalculator::default().calculate_ticket_price(request)
}
