use std::fmt;
use std::path::Path;
use venue_settings::{Api, Pricing, Settings};

pub mod cli;
pub mod commands;
pub mod diagnostics;

/// Installs error hooks from across all crates of the venue project.
pub fn install_hooks() {
    venue_utils::Error::init();
}

/// Settings in effect, as printed by `venue settings show`.
pub struct SettingsSummary<'a> {
    pub path: Option<&'a Path>,
    pub api: &'a Api,
    pub pricing: &'a Pricing,
}

impl<'a> SettingsSummary<'a> {
    #[must_use]
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            path: settings.path(),
            api: settings.api(),
            pricing: settings.pricing(),
        }
    }
}

impl fmt::Display for SettingsSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use nu_ansi_term::{Color, Style};

        let ascii_art = r"
 _   _____ _ __  _   _  ___
| | / / _ \ '_ \| | | |/ _ \
| |/ /  __/ | | | |_| |  __/
|___/ \___|_| |_|\__,_|\___|
";

        let header = Style::new().bold();
        writeln!(f, "{}", Style::new().fg(Color::Green).paint(ascii_art))?;
        writeln!(f, "{}:\t{}", header.paint("Version"), env!("CARGO_PKG_VERSION"))?;
        writeln!(
            f,
            "{}:\t{}",
            header.paint("Build"),
            if cfg!(release) { "release" } else { "debug" }
        )?;
        writeln!(f)?;

        match self.path {
            Some(path) => writeln!(f, "{}:\t{}", header.paint("Settings file"), path.display())?,
            None => writeln!(f, "{}:\t<none>", header.paint("Settings file"))?,
        }

        writeln!(f, "{}:\t{}", header.paint("API URL"), self.api.url)?;
        writeln!(f, "{}:\t{:?}", header.paint("Timeout"), self.api.timeout)?;
        writeln!(
            f,
            "{}:\t{}",
            header.paint("Pricing"),
            Style::new()
                .fg(Color::Cyan)
                .paint(self.pricing.partial_day_policy.as_str())
        )?;
        write!(f, "{}:\t{}", header.paint("GST"), self.pricing.gst())
    }
}
