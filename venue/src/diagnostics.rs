use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, Layer};
use venue_settings::{Logging, LoggingStyle};
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{Result, Suggestion};

/// Sets up logging to stderr, leaving stdout to command output.
pub fn init(logging: &Logging) -> Result<()> {
    tracing_log::LogTracer::init()
        .into_typed_error()
        .attach_printable("could not initialize log tracer")
        .anonymize_error()?;

    #[cfg(release)]
    let default_directive = LevelFilter::WARN;
    #[cfg(not(release))]
    let default_directive = LevelFilter::INFO;

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_directive.into())
        .parse(&logging.targets)
        .into_typed_error()
        .attach_printable("could not parse log targets")
        .attach(Suggestion::ReadDirectivesGuide)
        .anonymize_error()?;

    let log_layer = match logging.style {
        LoggingStyle::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_writer(std::io::stderr)
            .boxed(),
        LoggingStyle::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .without_time()
            .with_writer(std::io::stderr)
            .boxed(),
        LoggingStyle::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
    }
    .with_filter(env_filter);

    let subscriber = tracing_subscriber::Registry::default()
        .with(log_layer)
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .into_typed_error()
        .attach_printable("unable to setup tracing")
        .anonymize_error()?;

    Ok(())
}
