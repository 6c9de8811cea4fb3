//! Conversions from external infrastructure errors into domain errors.

use dlpscope_domain::DlpError;
use reqwest::header::InvalidHeaderValue;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DlpError);

impl From<InfraError> for DlpError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DlpError> for InfraError {
    fn from(value: DlpError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDlpError {
    fn into_dlp(self) -> DlpError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DlpError */
/* -------------------------------------------------------------------------- */

impl IntoDlpError for HttpError {
    fn into_dlp(self) -> DlpError {
        if self.is_timeout() {
            return DlpError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DlpError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => DlpError::Auth(message),
                _ => DlpError::Service { status: code, message },
            };
        }

        if self.is_builder() {
            return DlpError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return DlpError::MalformedResponse(self.to_string());
        }

        DlpError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_dlp())
    }
}

/* -------------------------------------------------------------------------- */
/* url / header errors → DlpError */
/* -------------------------------------------------------------------------- */

impl IntoDlpError for UrlError {
    fn into_dlp(self) -> DlpError {
        DlpError::Config(format!("invalid endpoint URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_dlp())
    }
}

impl IntoDlpError for InvalidHeaderValue {
    fn into_dlp(self) -> DlpError {
        DlpError::Config(format!("value cannot be sent as an HTTP header: {self}"))
    }
}

impl From<InvalidHeaderValue> for InfraError {
    fn from(value: InvalidHeaderValue) -> Self {
        InfraError(value.into_dlp())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
