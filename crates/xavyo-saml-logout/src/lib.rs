//! SAML 2.0 LogoutRequest library for xavyo
//!
//! This crate provides:
//! - `LogoutRequest` construction from the local principal's claims or from
//!   an explicit `NameID` and session index (IdP-initiated logout)
//! - Namespace-qualified XML serialization in schema order
//! - Parsing of inbound requests with element-name, envelope and
//!   `NotOnOrAfter` expiry validation
//!
//! # Example
//!
//! ```
//! use xavyo_saml_logout::{LogoutRequest, NameIdentifier, SystemClock, NAMEID_FORMAT_EMAIL};
//!
//! let request = LogoutRequest::new(
//!     NameIdentifier::new("user@example.com", NAMEID_FORMAT_EMAIL),
//!     "_session_abc123",
//!     &SystemClock,
//! )
//! .with_issuer("https://idp.example.com");
//!
//! let xml = request.to_xml().unwrap();
//! let parsed = LogoutRequest::read(&xml, &SystemClock).unwrap();
//! assert_eq!(parsed.session_index(), Some("_session_abc123"));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod saml;
pub mod services;
pub mod xml;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LogoutRequestConfig;
pub use error::{SamlError, SamlResult};
pub use models::{LogoutReason, LogoutRequest, RequestEnvelope};
pub use saml::{
    Claim, ClaimsIdentity, ClaimsPrincipal, NameIdentifier, NAMEID_FORMAT_EMAIL,
    NAMEID_FORMAT_PERSISTENT, NAMEID_FORMAT_TRANSIENT, NAMEID_FORMAT_UNSPECIFIED,
};
pub use services::{LogoutRequestReader, SignatureVerifier};
