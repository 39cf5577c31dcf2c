//! SAML message models

pub mod envelope;
pub mod logout_request;

pub use envelope::RequestEnvelope;
pub use logout_request::{LogoutReason, LogoutRequest, DEFAULT_REQUEST_VALIDITY_MINUTES};
