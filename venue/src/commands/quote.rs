use rust_decimal::Decimal;
use thiserror::Error;
use venue_pricing::{Gst, Pricer, PricingRequest, Quote};
use venue_settings::Pricing;
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{Error, ErrorCategory, Result, Suggestion};

use crate::cli::QuoteArgs;

#[derive(Debug, Error)]
#[error("could not quote booking")]
pub struct QuoteError;

pub fn run(args: &QuoteArgs, pricing: &Pricing) -> Result<()> {
    let (quote, pricer) = quote(args, pricing).anonymize_error()?;
    super::print_quote(&quote, &pricer.gst);
    Ok(())
}

/// Prices the booking described by `args` with `pricing`, applying the
/// command line overrides on top of it.
fn quote(args: &QuoteArgs, pricing: &Pricing) -> Result<(Quote, Pricer), QuoteError> {
    let mut pricer = pricing.pricer();
    if let Some(policy) = args.policy {
        pricer.policy = policy;
    }
    if let Some(rate) = args.gst_rate {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(Error::context(ErrorCategory::User, QuoteError))
                .attach_printable(format!("GST rate is out of range: {rate}"))
                .attach(Suggestion::FixSetting {
                    key: "--gst-rate",
                    expected: "a fraction between 0 and 1, 18% is written as 0.18",
                });
        }
        pricer.gst = Gst::new(rate);
    }

    let slot = args
        .slot
        .slot()
        .into_typed_error()
        .category(ErrorCategory::User)
        .change_context(QuoteError)?;

    let (start, end) = (args.slot.start, args.slot.end_date());
    if end < start {
        return Err(Error::context(ErrorCategory::User, QuoteError))
            .attach_printable(format!("end date {end} is before start date {start}"));
    }

    let request = PricingRequest::builder()
        .function_start_date(start)
        .function_end_date(end)
        .slot(slot)
        .hall_price_per_day(args.price_per_day)
        .build();

    Ok((pricer.quote(&request), pricer))
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use venue_pricing::PartialDayPolicy;

    fn args(extra: &[&str]) -> QuoteArgs {
        let argv = ["venue", "quote", "--price-per-day", "10000", "--start", "2025-03-01"]
            .into_iter()
            .chain(extra.iter().copied());
        match Cli::parse_from(argv).command {
            Command::Quote(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn uses_configured_pricing_by_default() {
        let args = args(&["--from", "12:00", "--to", "18:00"]);
        let (quote, pricer) = quote(&args, &Pricing::default()).unwrap();
        assert_eq!(pricer, Pricer::default());
        assert_eq!(quote.subtotal, Decimal::from(2500));
        assert_eq!(quote.total, Decimal::from(2950));
    }

    #[test]
    fn overrides_policy_and_gst_rate() {
        let args = args(&[
            "--end",
            "2025-03-04",
            "--from",
            "12:00",
            "--to",
            "18:00",
            "--policy",
            "edge_days",
            "--gst-rate",
            "0.05",
        ]);
        let (quote, pricer) = quote(&args, &Pricing::default()).unwrap();

        assert_eq!(pricer.policy, PartialDayPolicy::EdgeDays);
        assert_eq!(pricer.gst.rate(), Decimal::new(5, 2));
        // two edge days at 2500 plus two interior days at 10000
        assert_eq!(quote.subtotal, Decimal::from(25000));
        assert_eq!(quote.gst, Decimal::from(1250));
    }

    #[test]
    fn rejects_end_before_start() {
        let error = quote(&args(&["--end", "2025-02-27"]), &Pricing::default()).unwrap_err();
        assert!(error.get_category().is_user_error());
        assert!(format!("{error:?}").contains("before start date"));
    }

    #[test]
    fn rejects_out_of_range_gst_rate() {
        let error = quote(&args(&["--gst-rate", "18"]), &Pricing::default()).unwrap_err();
        assert!(error.get_category().is_user_error());
        assert!(error.contains::<Suggestion>());
    }

    #[test]
    fn half_a_window_is_user_error() {
        let error = quote(&args(&["--from", "12:00"]), &Pricing::default()).unwrap_err();
        assert!(error.get_category().is_user_error());
    }
}
