use venue_schema::types::{Subscription, SubscriptionStatus};
use venue_schema::PlanId;
use venue_utils::error::exts::ResultExt;
use venue_utils::Result;

use super::Context;

pub async fn plans(ctx: &Context) -> Result<()> {
    let plans = ctx.client.plans().await.anonymize_error()?;
    for plan in &plans {
        println!(
            "{}\t{}\t{}/month\t{} days",
            plan.id, plan.name, plan.price_monthly, plan.duration_days
        );
        for perk in &plan.perks {
            println!("\t- {perk}");
        }
    }
    Ok(())
}

pub async fn subscribe(ctx: &Context, plan_id: &PlanId) -> Result<()> {
    let session = ctx.session().anonymize_error()?;
    let subscription = ctx
        .client
        .subscribe(&session, plan_id)
        .await
        .anonymize_error()?;
    print_details(&subscription);
    Ok(())
}

pub async fn current(ctx: &Context) -> Result<()> {
    let session = ctx.session().anonymize_error()?;
    match ctx
        .client
        .current_subscription(&session)
        .await
        .anonymize_error()?
    {
        Some(subscription) => print_details(&subscription),
        None => eprintln!("You have no active subscription."),
    }
    Ok(())
}

fn print_details(subscription: &Subscription) {
    let lapsed = subscription.status == SubscriptionStatus::Active
        && !subscription.is_active_on(Context::today());
    println!("Subscription:\t{}", subscription.id);
    println!("Plan:\t\t{}", subscription.plan_id);
    println!(
        "Period:\t\t{} to {}",
        subscription.starts_on, subscription.ends_on
    );
    println!(
        "Status:\t\t{}{}",
        subscription.status,
        if lapsed { " (lapsed)" } else { "" }
    );
}
