use error_stack::Report;
use std::fmt;
use thiserror::Error as ThisError;
use tracing_error::SpanTrace;

mod category;
mod into_error;

pub mod exts;
pub mod tags;

pub use self::category::*;
pub use ::error_stack::Context;

pub type Result<T, E = AnonymizedError> = std::result::Result<T, Error<E>>;

/// Context used for errors whose concrete context does not matter
/// to the caller anymore.
#[derive(Debug, ThisError)]
#[error("an error occurred")]
pub struct AnonymizedError;

#[must_use]
pub struct Error<C = AnonymizedError> {
    pub(crate) category: ErrorCategory,
    pub(crate) report: Report<C>,
    trace: SpanTrace,
}

impl Error {
    /// Wrapper of [`Report::install_debug_hook`].
    pub fn install_hook<T: Send + Sync + 'static>(
        hook: impl Fn(&T, &mut error_stack::fmt::HookContext<T>) + Send + Sync + 'static,
    ) {
        Report::install_debug_hook::<T>(hook);
    }

    /// Installs hooks from all tags in [`venue_utils`](crate) and sets
    /// up the report preferences used across the workspace.
    pub fn init() {
        use self::tags::Suggestion;
        use crate::http::tags::{HttpErrorInfo, RequestTag};
        use error_stack::fmt::{Charset, ColorMode};

        Report::set_charset(Charset::Ascii);
        Report::set_color_mode(ColorMode::None);

        Suggestion::install_hook();
        HttpErrorInfo::install_hook();
        RequestTag::install_hook();
    }
}

impl<C: Context> Error<C> {
    #[track_caller]
    pub fn context(category: ErrorCategory, context: C) -> Self {
        Self {
            category,
            report: Report::new(context),
            trace: SpanTrace::capture(),
        }
    }

    #[track_caller]
    pub fn anonymize(self) -> Error {
        self.change_context(AnonymizedError)
    }

    #[track_caller]
    pub fn change_context<N: Context>(self, context: N) -> Error<N> {
        Error {
            category: self.category,
            report: self.report.change_context(context),
            trace: self.trace,
        }
    }

    #[track_caller]
    pub fn attach<A>(mut self, attachment: A) -> Self
    where
        A: Send + Sync + 'static,
    {
        self.report = self.report.attach(attachment);
        self
    }

    #[track_caller]
    pub fn attach_printable<A>(mut self, attachment: A) -> Self
    where
        A: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.report = self.report.attach_printable(attachment);
        self
    }

    pub fn category(mut self, category: ErrorCategory) -> Self {
        self.category = category;
        self
    }

    pub fn get_category(&self) -> &ErrorCategory {
        &self.category
    }

    #[must_use]
    pub fn current_context(&self) -> &C {
        self.report.current_context()
    }

    /// Whether an attachment or context of type `N` is anywhere
    /// in the frame stack.
    #[must_use]
    pub fn contains<N>(&self) -> bool
    where
        N: Send + Sync + 'static,
    {
        self.report.contains::<N>()
    }

    pub fn downcast_ref<N>(&self) -> Option<&N>
    where
        N: Send + Sync + 'static,
    {
        self.report.downcast_ref::<N>()
    }

    #[must_use]
    pub fn into_report(self) -> Report<C> {
        self.report
    }
}

impl<C> fmt::Debug for Error<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("category", &self.category)
            .field("report", &self.report)
            .field("trace", &self.trace)
            .finish()
    }
}

impl<C> fmt::Display for Error<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.category, f)?;
        writeln!(f, ": {:?}", self.report)?;
        fmt::Display::fmt(&self.trace, f)
    }
}
