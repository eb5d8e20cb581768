use rust_decimal::Decimal;
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::calculator::{calculate_price, PartialDayPolicy, PricingRequest};
use crate::gst::Gst;
use crate::slot::BookingSlot;

/// Breakdown shown before a booking is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub days: i64,
    pub slot: BookingSlot,
    /// Pre-GST total.
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub total: Decimal,
}

/// Pricing configuration shared by every calculation a session makes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct Pricer {
    #[builder(default)]
    pub policy: PartialDayPolicy,
    #[builder(default)]
    pub gst: Gst,
}

impl Pricer {
    #[must_use]
    pub fn price(&self, request: &PricingRequest) -> Decimal {
        calculate_price(request, self.policy)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(policy = %self.policy))]
    #[must_use]
    pub fn quote(&self, request: &PricingRequest) -> Quote {
        let subtotal = self.price(request);
        let total = self.gst.apply(subtotal);
        let quote = Quote {
            days: request.days(),
            slot: request.slot,
            subtotal,
            gst: total.saturating_sub(subtotal),
            total,
        };
        tracing::trace!(?quote, "quoted booking");
        quote
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use static_assertions::assert_impl_all;
    use std::str::FromStr;

    assert_impl_all!(Pricer: Send, Sync, Copy);

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn quote_breaks_down_total() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let request = PricingRequest::builder()
            .function_start_date(day)
            .function_end_date(day)
            .slot(BookingSlot::Partial {
                start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            })
            .hall_price_per_day(dec("10000"))
            .build();

        let quote = Pricer::default().quote(&request);
        assert_eq!(quote.days, 1);
        assert_eq!(quote.subtotal, dec("2500.00"));
        assert_eq!(quote.gst, dec("450.00"));
        assert_eq!(quote.total, dec("2950.00"));
        assert_eq!(quote.subtotal + quote.gst, quote.total);
    }

    #[test]
    fn gst_matches_rounded_surcharge_for_any_total() {
        let pricer = Pricer::default();
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        for rate in ["1", "99.99", "416.67", "12345.65", "0.01"] {
            let request = PricingRequest::builder()
                .function_start_date(day)
                .function_end_date(day)
                .slot(BookingSlot::FullDay)
                .hall_price_per_day(dec(rate))
                .build();

            let quote = pricer.quote(&request);
            let expected = crate::round_currency(quote.subtotal * dec("1.18"));
            assert_eq!(quote.total, expected);
        }
    }
}
