use venue_schema::types::Invoice;
use venue_utils::error::exts::ResultExt;
use venue_utils::Result;

use super::Context;
use crate::cli::InvoicesCommand;

pub async fn run(ctx: &Context, cmd: InvoicesCommand) -> Result<()> {
    let session = ctx.session().anonymize_error()?;
    match cmd {
        InvoicesCommand::Create { booking_id } => {
            let invoice = ctx
                .client
                .issue_invoice(&session, &booking_id)
                .await
                .anonymize_error()?;
            print_details(&invoice);
        }
        InvoicesCommand::List => {
            let invoices = ctx.client.my_invoices(&session).await.anonymize_error()?;
            if invoices.is_empty() {
                eprintln!("No invoices yet.");
            }
            for invoice in &invoices {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    invoice.id,
                    invoice.booking_id,
                    invoice.issued_at.date_naive(),
                    invoice.total,
                    invoice.status
                );
            }
        }
        InvoicesCommand::Show { id } => {
            let invoice = ctx.client.invoice(&session, &id).await.anonymize_error()?;
            print_details(&invoice);
        }
    }
    Ok(())
}

fn print_details(invoice: &Invoice) {
    println!("Invoice:\t{}", invoice.id);
    println!("Booking:\t{}", invoice.booking_id);
    println!("Hall:\t\t{}", invoice.hall_id);
    println!("Issued:\t\t{}", invoice.issued_at.format("%Y-%m-%d %H:%M UTC"));
    println!("Subtotal:\t{}", invoice.subtotal);
    println!("GST:\t\t{}", invoice.gst);
    println!("Total:\t\t{}", invoice.total);
    println!("Status:\t\t{}", invoice.status);
}
