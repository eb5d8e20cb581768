use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use doku::Document;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use venue_utils::env::{first_var_opt, var_opt, var_opt_parsed};
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{Error, ErrorCategory, Result, Suggestion};

mod api;
mod error;
mod logging;
mod pricing;

pub use self::api::*;
pub use self::error::SettingsLoadError;
pub use self::logging::*;
pub use self::pricing::*;

#[derive(Debug, Document, Deserialize)]
pub struct Settings {
    api: Api,

    #[serde(default)]
    pricing: Pricing,
    #[serde(default)]
    logging: Logging,
    #[serde(skip)]
    #[doku(skip)]
    path: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from the settings file (if there's any) and
    /// from `VENUE_*` environment variables, the latter taking priority.
    ///
    /// Nested keys are separated by a double underscore, like
    /// `VENUE_PRICING__GST_RATE` for `pricing.gst_rate`.
    pub fn from_env() -> Result<Self, SettingsLoadError> {
        let mut builder = Config::builder();

        let resolved_path = Self::resolve_path()?;
        if let Some(resolved_path) = resolved_path.as_ref() {
            let source: config::File<config::FileSourceFile, config::FileFormat> =
                resolved_path.clone().into();

            builder = builder.add_source(source.format(config::FileFormat::Toml));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("VENUE")
                .prefix_separator("_")
                .separator("__"),
        );

        let builder = Self::resolve_alternative_vars(builder)
            .attach_printable("could not resolve alternative environment variables")?;

        let mut settings = Self::build(builder)
            .attach_printable_lazy(|| format!("loaded settings file from: {resolved_path:?}"))?;

        settings.path = resolved_path;
        Ok(settings)
    }

    const ALTERNATIVE_FILE_PATHS: &'static [&'static str] = &[
        "venue.toml",
        // these are only applicable in Unix systems
        #[cfg(target_family = "unix")]
        "/etc/venue/settings.toml",
    ];

    pub fn resolve_path() -> Result<Option<PathBuf>, SettingsLoadError> {
        // VENUE_SETTINGS
        let resolved_path = var_opt_parsed::<PathBuf>("VENUE_SETTINGS")
            .change_context(SettingsLoadError)
            .attach(Suggestion::FixSetting {
                key: "VENUE_SETTINGS",
                expected: "a valid path",
            })?;

        if resolved_path.is_some() {
            return Ok(resolved_path);
        }

        let found = Self::ALTERNATIVE_FILE_PATHS.iter().find(|path| {
            std::fs::metadata(path)
                .map(|v| v.is_file())
                .unwrap_or(false)
        });

        Ok(found.map(PathBuf::from))
    }

    /// Generates TOML data with default values of [`Settings`] and
    /// documentation using [`doku`].
    #[must_use]
    pub fn generate_docs() -> String {
        let fmt = doku::toml::Formatting {
            ..Default::default()
        };
        doku::to_toml_fmt::<Self>(&fmt)
    }

    /// Rejects values that deserialize fine but cannot be used.
    pub fn check(&self) -> Result<(), SettingsLoadError> {
        let rate = self.pricing.gst_rate;
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(Error::context(ErrorCategory::User, SettingsLoadError))
                .attach_printable(format!("`pricing.gst_rate` is out of range: {rate}"))
                .attach(Suggestion::FixSetting {
                    key: "pricing.gst_rate",
                    expected: "a fraction between 0 and 1, 18% is written as 0.18",
                });
        }

        let scheme = self.api.url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(Error::context(ErrorCategory::User, SettingsLoadError))
                .attach_printable(format!("`api.url` has unsupported scheme: {scheme:?}"))
                .attach(Suggestion::FixSetting {
                    key: "api.url",
                    expected: "an http(s) URL",
                });
        }

        Ok(())
    }
}

impl Settings {
    #[must_use]
    pub fn api(&self) -> &Api {
        &self.api
    }

    #[must_use]
    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    #[must_use]
    pub fn logging(&self) -> &Logging {
        &self.logging
    }

    /// Current working path for the [`Settings`] file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Settings {
    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsLoadError> {
        let settings: Settings = builder
            .build()
            .into_typed_error()
            .change_context(SettingsLoadError)
            .and_then(|v| {
                v.try_deserialize()
                    .into_typed_error()
                    .change_context(SettingsLoadError)
            })
            .category(ErrorCategory::User)?;

        settings.check()?;
        Ok(settings)
    }

    fn resolve_alternative_vars(
        mut builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, SettingsLoadError> {
        // Deployments usually share the backend address with other
        // services through `API_URL`.
        let api_url = first_var_opt(&["VENUE_API_URL", "API_URL"]).change_context(SettingsLoadError)?;
        if let Some(url) = api_url {
            builder = builder
                .set_override("api.url", url)
                .into_typed_error()
                .change_context(SettingsLoadError)
                .attach_printable("could not override settings for API_URL")?;
        }

        // `RUST_LOG` usage
        if let Some(value) = var_opt("RUST_LOG").change_context(SettingsLoadError)? {
            builder = builder
                .set_override("logging.targets", value)
                .into_typed_error()
                .change_context(SettingsLoadError)
                .attach_printable("could not override settings for RUST_LOG")?;
        }

        Ok(builder)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;
    use std::sync::{Mutex, PoisonError};
    use std::time::Duration;
    use venue_pricing::PartialDayPolicy;

    assert_impl_all!(Settings: Send, Sync);

    fn from_toml(data: &str) -> Result<Settings, SettingsLoadError> {
        let builder =
            Config::builder().add_source(config::File::from_str(data, config::FileFormat::Toml));
        Settings::build(builder)
    }

    #[test]
    fn minimal_settings_use_defaults() {
        let settings = from_toml(
            r#"
            [api]
            url = "http://localhost:5000"
            "#,
        )
        .unwrap();

        assert_eq!(settings.api().url.as_str(), "http://localhost:5000/");
        assert_eq!(settings.api().timeout, Duration::from_secs(10));
        assert_eq!(
            settings.pricing().partial_day_policy,
            PartialDayPolicy::Uniform
        );
        assert_eq!(settings.pricing().gst_rate, Decimal::new(18, 2));
        assert_eq!(settings.logging().style, LoggingStyle::Compact);
        assert!(settings.path().is_none());
    }

    #[test]
    fn reads_every_section() {
        let settings = from_toml(
            r#"
            [api]
            url = "https://api.venue.example.com/v1/"
            timeout = "90s"

            [pricing]
            partial_day_policy = "edge_days"
            gst_rate = 0.05

            [logging]
            style = "json"
            targets = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.api().timeout, Duration::from_secs(90));
        let pricer = settings.pricing().pricer();
        assert_eq!(pricer.policy, PartialDayPolicy::EdgeDays);
        assert_eq!(pricer.gst.rate(), Decimal::new(5, 2));
        assert_eq!(settings.logging().style, LoggingStyle::Json);
        assert_eq!(settings.logging().targets, "debug");
    }

    #[test]
    fn missing_api_url_is_an_error() {
        let error = from_toml("[pricing]\ngst_rate = 0.18").unwrap_err();
        assert!(error.get_category().is_user_error());
    }

    #[test]
    fn rejects_out_of_range_gst() {
        let error = from_toml(
            r#"
            [api]
            url = "http://localhost:5000"
            [pricing]
            gst_rate = 18
            "#,
        )
        .unwrap_err();
        assert!(error.get_category().is_user_error());
        assert!(error.contains::<Suggestion>());
    }

    #[test]
    fn rejects_non_http_url() {
        let error = from_toml(
            r#"
            [api]
            url = "ftp://files.example.com"
            "#,
        )
        .unwrap_err();
        assert!(format!("{error:?}").contains("unsupported scheme"));
    }

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "VENUE_SETTINGS",
        "VENUE_API_URL",
        "API_URL",
        "VENUE_PRICING__GST_RATE",
        "VENUE_LOGGING__STYLE",
        "RUST_LOG",
    ];

    /// Runs `f` with only `vars` set out of [`ENV_KEYS`], writing `file`
    /// as the settings file. Previous values are restored afterwards.
    fn with_env<T>(file: &str, vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let path =
            std::env::temp_dir().join(format!("venue-settings-{}.toml", std::process::id()));
        std::fs::write(&path, file).unwrap();

        let saved = ENV_KEYS
            .iter()
            .map(|key| (*key, std::env::var_os(key)))
            .collect::<Vec<_>>();

        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        std::env::set_var("VENUE_SETTINGS", &path);
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let output = f();

        for (key, value) in saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        std::fs::remove_file(&path).ok();
        output
    }

    const FILE: &str = r#"
        [api]
        url = "http://from-file:5000"

        [pricing]
        gst_rate = 0.18

        [logging]
        targets = "info"
    "#;

    #[test]
    fn file_alone_is_loaded() {
        let settings = with_env(FILE, &[], Settings::from_env).unwrap();
        assert_eq!(settings.api().url.as_str(), "http://from-file:5000/");
        assert_eq!(settings.logging().targets, "info");
        assert!(settings.path().is_some());
    }

    #[test]
    fn api_url_variables_win_over_file() {
        let settings = with_env(
            FILE,
            &[("VENUE_API_URL", "http://from-env:6000")],
            Settings::from_env,
        )
        .unwrap();
        assert_eq!(settings.api().url.as_str(), "http://from-env:6000/");

        let settings =
            with_env(FILE, &[("API_URL", "http://shared:7000")], Settings::from_env).unwrap();
        assert_eq!(settings.api().url.as_str(), "http://shared:7000/");
    }

    #[test]
    fn venue_api_url_is_preferred_over_api_url() {
        let settings = with_env(
            "",
            &[
                ("API_URL", "http://shared:7000"),
                ("VENUE_API_URL", "http://own:8000"),
            ],
            Settings::from_env,
        )
        .unwrap();
        assert_eq!(settings.api().url.as_str(), "http://own:8000/");
    }

    #[test]
    fn nested_variables_use_double_underscore() {
        let settings = with_env(
            FILE,
            &[
                ("VENUE_PRICING__GST_RATE", "0.05"),
                ("VENUE_LOGGING__STYLE", "json"),
            ],
            Settings::from_env,
        )
        .unwrap();
        assert_eq!(settings.pricing().gst_rate, Decimal::new(5, 2));
        assert_eq!(settings.logging().style, LoggingStyle::Json);
    }

    #[test]
    fn rust_log_overrides_logging_targets() {
        let settings =
            with_env(FILE, &[("RUST_LOG", "venue=trace")], Settings::from_env).unwrap();
        assert_eq!(settings.logging().targets, "venue=trace");
    }

    #[test]
    fn docs_mention_every_section() {
        let docs = Settings::generate_docs();
        for key in ["api", "url", "timeout", "pricing", "gst_rate", "partial_day_policy", "logging"] {
            assert!(docs.contains(key), "{key} is missing from:\n{docs}");
        }
    }
}
