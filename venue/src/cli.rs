use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use venue_pricing::{BookingSlot, MissingSlotTime, PartialDayPolicy};
use venue_schema::{BookingId, HallId, InvoiceId, PlanId};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Token of a logged in account, as printed by `venue login`.
    #[arg(long, global = true, env = "VENUE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Treat the token as an admin token.
    #[arg(long, global = true)]
    pub admin: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prices a booking offline, without talking to the backend.
    Quote(QuoteArgs),

    /// Logs in and prints the session token.
    Login(LoginArgs),

    /// Creates a user account and prints its session token.
    Register(RegisterArgs),

    /// Browses and manages halls.
    #[command(subcommand)]
    Halls(HallsCommand),

    /// Requests a booking for a hall.
    Book(BookArgs),

    /// Lists, cancels and decides on bookings.
    #[command(subcommand)]
    Bookings(BookingsCommand),

    /// Issues and looks up invoices.
    #[command(subcommand)]
    Invoices(InvoicesCommand),

    /// Lists subscription plans on offer.
    Plans,

    /// Subscribes to a plan.
    Subscribe {
        plan_id: PlanId,
    },

    /// Shows the current subscription.
    Subscription,

    /// Inspects settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

/// Date range and time window of a booking.
///
/// Leaving out both `--from` and `--to` books the full day.
#[derive(Debug, Args)]
pub struct SlotArgs {
    /// First day of the function (YYYY-MM-DD).
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the function, defaults to the first day.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Start of the booked time window (HH:MM).
    #[arg(long, value_parser = parse_time)]
    pub from: Option<NaiveTime>,

    /// End of the booked time window (HH:MM).
    #[arg(long, value_parser = parse_time)]
    pub to: Option<NaiveTime>,
}

impl SlotArgs {
    pub fn end_date(&self) -> NaiveDate {
        self.end.unwrap_or(self.start)
    }

    pub fn slot(&self) -> Result<BookingSlot, MissingSlotTime> {
        let full_day = self.from.is_none() && self.to.is_none();
        BookingSlot::from_parts(full_day, self.from, self.to)
    }
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Daily rate of the hall.
    #[arg(long)]
    pub price_per_day: Decimal,

    #[command(flatten)]
    pub slot: SlotArgs,

    /// Overrides `pricing.partial_day_policy`.
    #[arg(long)]
    pub policy: Option<PartialDayPolicy>,

    /// Overrides `pricing.gst_rate`.
    #[arg(long)]
    pub gst_rate: Option<Decimal>,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "VENUE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long, env = "VENUE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Subcommand)]
pub enum HallsCommand {
    List,
    Show {
        id: HallId,
    },
    Create(CreateHallArgs),
    Update(UpdateHallArgs),
    Delete {
        id: HallId,
    },
}

#[derive(Debug, Args)]
pub struct CreateHallArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub capacity: u32,

    #[arg(long)]
    pub price_per_day: Decimal,

    #[arg(long)]
    pub description: Option<String>,

    /// Image URL, may be repeated.
    #[arg(long = "image")]
    pub images: Vec<String>,
}

#[derive(Debug, Args)]
pub struct UpdateHallArgs {
    pub id: HallId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub capacity: Option<u32>,

    #[arg(long)]
    pub price_per_day: Option<Decimal>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct BookArgs {
    pub hall_id: HallId,

    #[command(flatten)]
    pub slot: SlotArgs,

    #[arg(long)]
    pub guests: u32,

    #[arg(long)]
    pub purpose: Option<String>,

    /// Only print the quote, do not submit the booking.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// Lists your bookings, or every booking with `--admin`.
    List,
    Cancel {
        id: BookingId,
    },
    Approve {
        id: BookingId,
    },
    Reject {
        id: BookingId,

        #[arg(long)]
        reason: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum InvoicesCommand {
    /// Issues an invoice for an approved booking.
    Create {
        booking_id: BookingId,
    },
    List,
    Show {
        id: InvoiceId,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Prints a documented settings file template.
    Docs,
    /// Prints the settings currently in effect.
    Show,
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn full_day_when_no_window_given() {
        let cli = Cli::parse_from(["venue", "quote", "--price-per-day", "10000", "--start", "2025-03-01"]);
        let Command::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(args.slot.slot().unwrap(), BookingSlot::FullDay);
        assert_eq!(args.slot.end_date(), args.slot.start);
    }

    #[test]
    fn half_a_window_is_an_error() {
        let cli = Cli::parse_from([
            "venue", "book", "hall-1", "--start", "2025-03-01", "--from", "12:00", "--guests", "10",
        ]);
        let Command::Book(args) = cli.command else {
            panic!("expected book");
        };
        assert_eq!(args.slot.slot().unwrap_err().field(), "end_time");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["venue", "bookings", "list", "--admin", "--token", "t"]);
        assert!(cli.admin);
        assert_eq!(cli.token.as_deref(), Some("t"));
    }
}
