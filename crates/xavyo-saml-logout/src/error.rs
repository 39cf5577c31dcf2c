//! SAML-specific error types

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for SAML operations
pub type SamlResult<T> = Result<T, SamlError>;

/// SAML status returned when the requester sent something we reject
pub const STATUS_REQUESTER: &str = "urn:oasis:names:tc:SAML:2.0:status:Requester";

/// SAML status returned when the failure is on our side
pub const STATUS_RESPONDER: &str = "urn:oasis:names:tc:SAML:2.0:status:Responder";

/// SAML-specific errors
#[derive(Debug, Error)]
pub enum SamlError {
    /// An authenticated identity lacks a claim needed to build the request
    #[error("Missing Claim Type: {0}")]
    MissingClaim(String),

    /// Root element is not a `LogoutRequest`
    #[error("Not a SAML2 Logout Request (root element: {actual})")]
    WrongMessageType { actual: String },

    /// `NotOnOrAfter` lies in the past
    #[error("Logout request has expired. Logout request valid NotOnOrAfter {not_on_or_after}")]
    MessageExpired { not_on_or_after: DateTime<Utc> },

    /// Invalid or malformed `LogoutRequest`
    #[error("Invalid LogoutRequest: {0}")]
    InvalidLogoutRequest(String),

    /// Signature validation failed
    #[error("Signature validation failed: {0}")]
    SignatureValidationFailed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl SamlError {
    /// SAML top-level status code a caller should answer with for this error.
    #[must_use]
    pub fn saml_status(&self) -> &'static str {
        match self {
            SamlError::WrongMessageType { .. }
            | SamlError::MessageExpired { .. }
            | SamlError::InvalidLogoutRequest(_)
            | SamlError::SignatureValidationFailed(_) => STATUS_REQUESTER,
            SamlError::MissingClaim(_) | SamlError::InternalError(_) => STATUS_RESPONDER,
        }
    }
}
