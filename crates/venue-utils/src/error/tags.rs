use std::fmt;

const DIRECTIVES_GUIDE: &str =
    "https://docs.rs/tracing-subscriber/0.3.18/tracing_subscriber/filter/struct.EnvFilter.html#directives";

/// What the user can do about a failed operation. Rendered below the
/// report it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// A command needs a session token and none was given, or the
    /// token belongs to the wrong kind of account.
    LogIn { admin: bool },
    /// The backend refused the token it was given.
    RenewSession,
    /// A settings key or variable holds an unusable value.
    FixSetting {
        key: &'static str,
        expected: &'static str,
    },
    /// Log filter directives could not be parsed.
    ReadDirectivesGuide,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogIn { admin: false } => f.write_str(
                "log in with `venue login` and pass the printed token with `--token` or `VENUE_TOKEN`",
            ),
            Self::LogIn { admin: true } => f.write_str(
                "log in with `venue login --admin` and pass the printed token with `--token` along with `--admin`",
            ),
            Self::RenewSession => {
                f.write_str("your session may have expired, log in again to get a new token")
            }
            Self::FixSetting { key, expected } => write!(f, "`{key}` must be {expected}"),
            Self::ReadDirectivesGuide => {
                write!(f, "read the syntax guide for filter directives at:\n{DIRECTIVES_GUIDE}")
            }
        }
    }
}

impl Suggestion {
    pub(crate) fn install_hook() {
        crate::Error::install_hook::<Self>(move |this, ctx| {
            ctx.push_body(format!("suggestion: {this}"));
        });
    }
}
