use thiserror::Error;
use tracing::{debug, warn};
use venue_client::{Client, Session};
use venue_pricing::{Gst, Quote};
use venue_schema::types::Role;
use venue_settings::{Logging, Pricing, Settings};
use venue_utils::error::exts::ResultExt;
use venue_utils::{Error, ErrorCategory, Result, Suggestion};

use crate::cli::{Cli, Command, SettingsCommand};

mod account;
mod bookings;
mod halls;
mod invoices;
mod quote;
mod subscriptions;

#[derive(Debug, Error)]
#[error("this command needs a session token")]
pub struct MissingTokenError;

/// Everything a command talking to the backend needs.
pub struct Context {
    pub client: Client,
    token: Option<String>,
    admin: bool,
}

impl Context {
    pub fn session(&self) -> Result<Session, MissingTokenError> {
        let Some(token) = self.token.as_ref() else {
            return Err(Error::context(ErrorCategory::User, MissingTokenError))
                .attach(Suggestion::LogIn { admin: self.admin });
        };

        let role = if self.admin { Role::Admin } else { Role::User };
        Ok(Session::new(role, token.clone()))
    }

    pub fn today() -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    if let Command::Settings(SettingsCommand::Docs) = cli.command {
        println!("{}", Settings::generate_docs());
        return Ok(());
    }

    let settings = Settings::from_env();
    let default_logging = Logging::default();
    let logging = settings.as_ref().map_or(&default_logging, Settings::logging);
    crate::diagnostics::init(logging)?;

    // Quotes are computed locally, so a missing backend URL should not
    // stop them from working.
    if let Command::Quote(args) = &cli.command {
        let pricing = match &settings {
            Ok(settings) => *settings.pricing(),
            Err(error) => {
                warn!("could not load settings, using default pricing");
                debug!(?error);
                Pricing::default()
            }
        };
        return self::quote::run(args, &pricing);
    }

    let settings = settings.anonymize_error()?;
    if let Command::Settings(SettingsCommand::Show) = cli.command {
        println!("{}", crate::SettingsSummary::new(&settings));
        return Ok(());
    }

    let client = Client::new(settings.api(), settings.pricing().pricer()).anonymize_error()?;
    let ctx = Context {
        client,
        token: cli.token,
        admin: cli.admin,
    };

    match cli.command {
        Command::Login(args) => self::account::login(&ctx, &args).await,
        Command::Register(args) => self::account::register(&ctx, &args).await,
        Command::Halls(cmd) => self::halls::run(&ctx, cmd).await,
        Command::Book(args) => self::bookings::book(&ctx, &args).await,
        Command::Bookings(cmd) => self::bookings::run(&ctx, cmd).await,
        Command::Invoices(cmd) => self::invoices::run(&ctx, cmd).await,
        Command::Plans => self::subscriptions::plans(&ctx).await,
        Command::Subscribe { plan_id } => self::subscriptions::subscribe(&ctx, &plan_id).await,
        Command::Subscription => self::subscriptions::current(&ctx).await,
        Command::Quote(..) | Command::Settings(..) => Ok(()),
    }
}

pub(crate) fn print_quote(quote: &Quote, gst: &Gst) {
    println!("Days:\t\t{}", quote.days);
    println!("Slot:\t\t{}", quote.slot);
    println!("Subtotal:\t{}", quote.subtotal);
    println!("{gst}:\t{}", quote.gst);
    println!("Total:\t\t{}", quote.total);
}
