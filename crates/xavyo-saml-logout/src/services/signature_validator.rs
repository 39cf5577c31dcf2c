//! Signature verification hook for inbound messages
//!
//! XML-DSig verification lives with the host's key material. The reader only
//! needs a yes/no answer for the raw document before it trusts any field.

use crate::error::SamlResult;

/// Verifies the enveloped signature of a raw SAML document.
pub trait SignatureVerifier: Send + Sync {
    /// Return `Ok(())` if the document's signature is valid, otherwise
    /// [`SamlError::SignatureValidationFailed`](crate::SamlError::SignatureValidationFailed).
    fn verify(&self, xml: &str) -> SamlResult<()>;
}

impl<F> SignatureVerifier for F
where
    F: Fn(&str) -> SamlResult<()> + Send + Sync,
{
    fn verify(&self, xml: &str) -> SamlResult<()> {
        self(xml)
    }
}
