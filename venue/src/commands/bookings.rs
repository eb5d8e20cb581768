use venue_schema::forms::{BookHallForm, BookingDecisionForm};
use venue_schema::types::Booking;
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{ErrorCategory, Result};

use super::Context;
use crate::cli::{BookArgs, BookingsCommand};

pub async fn book(ctx: &Context, args: &BookArgs) -> Result<()> {
    let slot = args
        .slot
        .slot()
        .into_typed_error()
        .category(ErrorCategory::User)
        .anonymize_error()?;

    let form = BookHallForm::builder()
        .hall_id(&args.hall_id)
        .function_start_date(args.slot.start)
        .function_end_date(args.slot.end_date())
        .slot(slot)
        .guests(args.guests)
        .purpose(args.purpose.as_deref())
        .build();

    let gst = ctx.client.pricer().gst;
    if args.dry_run {
        let quote = ctx
            .client
            .quote_booking(&form, Context::today())
            .await
            .anonymize_error()?;
        super::print_quote(&quote, &gst);
        return Ok(());
    }

    let session = ctx.session().anonymize_error()?;
    let reservation = ctx
        .client
        .book_hall(&session, form, Context::today())
        .await
        .anonymize_error()?;

    super::print_quote(&reservation.quote, &gst);
    println!();
    print_row(&reservation.booking);
    Ok(())
}

pub async fn run(ctx: &Context, cmd: BookingsCommand) -> Result<()> {
    let session = ctx.session().anonymize_error()?;
    match cmd {
        BookingsCommand::List => {
            let bookings = if session.is_admin() {
                ctx.client.all_bookings(&session).await
            } else {
                ctx.client.my_bookings(&session).await
            }
            .anonymize_error()?;

            if bookings.is_empty() {
                eprintln!("No bookings found.");
            }
            for booking in &bookings {
                print_row(booking);
            }
        }
        BookingsCommand::Cancel { id } => {
            ctx.client
                .cancel_booking(&session, &id)
                .await
                .anonymize_error()?;
            eprintln!("Cancelled booking {id}");
        }
        BookingsCommand::Approve { id } => {
            let booking = ctx
                .client
                .decide_booking(&session, &id, BookingDecisionForm::Approve)
                .await
                .anonymize_error()?;
            print_row(&booking);
        }
        BookingsCommand::Reject { id, reason } => {
            let decision = BookingDecisionForm::Reject { reason: &reason };
            let booking = ctx
                .client
                .decide_booking(&session, &id, decision)
                .await
                .anonymize_error()?;
            print_row(&booking);
        }
    }
    Ok(())
}

fn print_row(booking: &Booking) {
    let dates = if booking.function_start_date == booking.function_end_date {
        booking.function_start_date.to_string()
    } else {
        format!(
            "{} to {}",
            booking.function_start_date, booking.function_end_date
        )
    };

    println!(
        "{}\t{}\t{}\t{}\t{} guests\t{} + {} GST\t{}",
        booking.id,
        booking.hall_id,
        dates,
        booking.slot,
        booking.guests,
        booking.total_price,
        booking.gst,
        booking.status
    );
    if let Some(reason) = &booking.rejection_reason {
        println!("\trejected: {reason}");
    }
}
