//! Services for reading and validating SAML logout messages

pub mod logout_parser;
pub mod signature_validator;

pub use logout_parser::LogoutRequestReader;
pub use signature_validator::SignatureVerifier;
