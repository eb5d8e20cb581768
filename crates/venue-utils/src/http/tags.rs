/// Describes why a request to the backend failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpErrorInfo {
    /// The backend answered with a non-success status code.
    Status(u16),
    Connect,
    Decode,
    TimedOut,
    Unknown,
}

impl HttpErrorInfo {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub(crate) fn install_hook() {
        crate::Error::install_hook::<Self>(|this, ctx| match this {
            Self::Status(code) => ctx.push_body(format!("status code: {code}")),
            Self::Connect => ctx.push_body("could not connect to the backend"),
            Self::Decode => ctx.push_body("could not decode response body"),
            Self::TimedOut => ctx.push_body("request timed out"),
            Self::Unknown => {}
        });
    }
}

/// Method and path of the request that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub method: reqwest::Method,
    pub path: String,
}

impl RequestTag {
    #[must_use]
    pub fn new(method: reqwest::Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub(crate) fn install_hook() {
        crate::Error::install_hook::<Self>(|this, ctx| {
            ctx.push_body(format!("method: {}", this.method));
            ctx.push_body(format!("path: {}", this.path));
        });
    }
}
