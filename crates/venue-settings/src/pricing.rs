use doku::Document;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use venue_pricing::{Gst, PartialDayPolicy, Pricer};

#[derive(Debug, Clone, Copy, Deserialize, Document, Serialize, TypedBuilder)]
#[serde(default)]
pub struct Pricing {
    /// How partial-day bookings spanning several days are billed.
    ///
    /// - `uniform` - every booked day is billed for the chosen time window
    /// - `edge_days` - the first and last day are billed for the time
    ///   window, the days in between are billed the full daily rate
    ///
    /// The default value is `uniform`, if not set.
    #[builder(default)]
    #[doku(as = "String", example = "uniform")]
    pub partial_day_policy: PartialDayPolicy,

    /// GST rate applied on top of the booking price, as a fraction.
    ///
    /// The default value is `0.18` (18%), if not set.
    #[builder(default = Gst::DEFAULT_RATE)]
    #[doku(as = "f64", example = "0.18")]
    pub gst_rate: Decimal,
}

impl Pricing {
    #[must_use]
    pub fn gst(&self) -> Gst {
        Gst::new(self.gst_rate)
    }

    #[must_use]
    pub fn pricer(&self) -> Pricer {
        Pricer::builder()
            .policy(self.partial_day_policy)
            .gst(self.gst())
            .build()
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            partial_day_policy: PartialDayPolicy::default(),
            gst_rate: Gst::DEFAULT_RATE,
        }
    }
}
