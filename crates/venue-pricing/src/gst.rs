use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::money::round_currency;

/// Goods and Services Tax, a flat surcharge on a pre-tax total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Gst {
    rate: Decimal,
}

impl Gst {
    /// 18%
    pub const DEFAULT_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

    #[must_use]
    pub const fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Total including tax, rounded to two decimal places.
    #[must_use]
    pub fn apply(&self, total: Decimal) -> Decimal {
        round_currency(total.saturating_mul(Decimal::ONE + self.rate))
    }

    /// Tax portion of [`Gst::apply`].
    #[must_use]
    pub fn amount(&self, total: Decimal) -> Decimal {
        self.apply(total).saturating_sub(round_currency(total))
    }
}

impl Default for Gst {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

impl Display for Gst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percent = self.rate.saturating_mul(Decimal::ONE_HUNDRED).normalize();
        write!(f, "GST {percent}%")
    }
}
