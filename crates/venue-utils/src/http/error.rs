use crate::error::exts::IntoError;
use crate::{Error, ErrorCategory};
use thiserror::Error;

use super::tags::HttpErrorInfo;

#[derive(Debug, Error)]
#[error("could not fetch HTTP request to the backend")]
pub struct FetchHttpError;

pub trait HttpErrorExt {
    fn http_error_info(&self) -> Option<&HttpErrorInfo>;
}

impl<T, C> HttpErrorExt for crate::Result<T, C> {
    fn http_error_info(&self) -> Option<&HttpErrorInfo> {
        match self {
            Ok(..) => None,
            Err(error) => error.http_error_info(),
        }
    }
}

impl<C> HttpErrorExt for crate::Error<C> {
    fn http_error_info(&self) -> Option<&HttpErrorInfo> {
        self.report.downcast_ref::<HttpErrorInfo>()
    }
}

impl IntoError for reqwest::Error {
    type Context = FetchHttpError;

    #[track_caller]
    fn into_venue_error(self) -> Error<Self::Context> {
        let (tag, category) = if self.is_timeout() {
            (HttpErrorInfo::TimedOut, ErrorCategory::Unknown)
        } else if self.is_connect() {
            (HttpErrorInfo::Connect, ErrorCategory::Unknown)
        } else if self.is_decode() {
            (HttpErrorInfo::Decode, ErrorCategory::Backend)
        } else if let Some(status) = self.status() {
            (HttpErrorInfo::Status(status.as_u16()), ErrorCategory::Backend)
        } else {
            (HttpErrorInfo::Unknown, ErrorCategory::Unknown)
        };

        Error::context(category, self)
            .change_context(FetchHttpError)
            .attach(tag)
    }
}
