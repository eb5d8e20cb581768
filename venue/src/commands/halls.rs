use venue_schema::forms::{InsertHallForm, UpdateHallForm};
use venue_schema::types::Hall;
use venue_utils::error::exts::ResultExt;
use venue_utils::Result;

use super::Context;
use crate::cli::HallsCommand;

pub async fn run(ctx: &Context, cmd: HallsCommand) -> Result<()> {
    match cmd {
        HallsCommand::List => {
            let halls = ctx.client.halls().await.anonymize_error()?;
            if halls.is_empty() {
                eprintln!("No halls listed yet.");
            }
            for hall in &halls {
                print_row(hall);
            }
        }
        HallsCommand::Show { id } => {
            let hall = ctx.client.hall(&id).await.anonymize_error()?;
            print_details(&hall);
        }
        HallsCommand::Create(args) => {
            let session = ctx.session().anonymize_error()?;
            let form = InsertHallForm::builder()
                .name(&args.name)
                .location(&args.location)
                .capacity(args.capacity)
                .price_per_day(args.price_per_day)
                .description(args.description.as_deref())
                .images(args.images.iter().map(String::as_str).collect())
                .build();

            let hall = ctx
                .client
                .create_hall(&session, &form)
                .await
                .anonymize_error()?;
            print_details(&hall);
        }
        HallsCommand::Update(args) => {
            let session = ctx.session().anonymize_error()?;
            let form = UpdateHallForm::builder()
                .name(args.name.as_deref())
                .location(args.location.as_deref())
                .capacity(args.capacity)
                .price_per_day(args.price_per_day)
                .description(args.description.as_deref())
                .build();

            let hall = ctx
                .client
                .update_hall(&session, &args.id, &form)
                .await
                .anonymize_error()?;
            print_details(&hall);
        }
        HallsCommand::Delete { id } => {
            let session = ctx.session().anonymize_error()?;
            ctx.client
                .delete_hall(&session, &id)
                .await
                .anonymize_error()?;
            eprintln!("Deleted hall {id}");
        }
    }
    Ok(())
}

fn print_row(hall: &Hall) {
    println!(
        "{}\t{}\t{}\t{} guests\t{}/day",
        hall.id, hall.name, hall.location, hall.capacity, hall.price_per_day
    );
}

fn print_details(hall: &Hall) {
    println!("Id:\t\t{}", hall.id);
    println!("Name:\t\t{}", hall.name);
    println!("Location:\t{}", hall.location);
    println!("Capacity:\t{}", hall.capacity);
    println!("Price per day:\t{}", hall.price_per_day);
    if let Some(description) = &hall.description {
        println!("Description:\t{description}");
    }
    for image in &hall.images {
        println!("Image:\t\t{image}");
    }
}
