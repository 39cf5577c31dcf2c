//! Parse and validate incoming SAML LogoutRequest XML

use super::signature_validator::SignatureVerifier;
use crate::clock::Clock;
use crate::config::LogoutRequestConfig;
use crate::error::{SamlError, SamlResult};
use crate::models::envelope::RequestEnvelope;
use crate::models::logout_request::{LogoutReason, LogoutRequest};
use crate::saml::{
    parse_instant, NameIdentifier, ASSERTION_NAMESPACE, FORMAT, LOGOUT_REQUEST, NAME_ID,
    NAMEID_FORMAT_UNSPECIFIED, NOT_ON_OR_AFTER, PROTOCOL_NAMESPACE, REASON, SESSION_INDEX,
};
use crate::xml::{parse_document, XmlElement};
use chrono::{DateTime, Duration, Utc};

/// Reader for inbound `LogoutRequest` documents.
///
/// Checks run in this order and the first failure is returned:
/// size limit, XML well-formedness, root element name, signature (when a
/// verifier is set), envelope fields, `NotOnOrAfter` expiry, content limits.
pub struct LogoutRequestReader<'a> {
    clock: &'a dyn Clock,
    config: LogoutRequestConfig,
    verifier: Option<&'a dyn SignatureVerifier>,
}

impl<'a> LogoutRequestReader<'a> {
    #[must_use]
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self {
            clock,
            config: LogoutRequestConfig::default(),
            verifier: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LogoutRequestConfig) -> Self {
        self.config = config;
        self
    }

    /// Require a valid signature before any field is read.
    #[must_use]
    pub fn with_signature_verifier(mut self, verifier: &'a dyn SignatureVerifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn read(&self, xml: &str) -> SamlResult<LogoutRequest> {
        if xml.len() > self.config.max_message_size {
            return Err(SamlError::InvalidLogoutRequest(format!(
                "LogoutRequest too large ({} > {} bytes)",
                xml.len(),
                self.config.max_message_size
            )));
        }

        let root = parse_document(xml)?;
        validate_element_name(&root)?;

        if let Some(verifier) = self.verifier {
            verifier.verify(xml)?;
        }

        let envelope = RequestEnvelope::read(&root, &self.config)?;
        let not_on_or_after = self.read_not_on_or_after(&root, envelope.id())?;

        let reason = root.attribute(REASON).map(LogoutReason::new);
        let name_id = self.read_name_id(&root)?;
        let session_index = self.read_session_index(&root)?;

        tracing::debug!(
            request_id = %envelope.id(),
            issuer = envelope.issuer().unwrap_or(""),
            has_session_index = session_index.is_some(),
            "Parsed SAML LogoutRequest"
        );

        Ok(LogoutRequest::from_parts(
            envelope,
            not_on_or_after,
            reason,
            name_id,
            session_index,
        ))
    }

    /// A malformed value is dropped; a value in the past rejects the message.
    fn read_not_on_or_after(
        &self,
        root: &XmlElement,
        request_id: &str,
    ) -> SamlResult<Option<DateTime<Utc>>> {
        let Some(raw) = root.attribute(NOT_ON_OR_AFTER) else {
            return Ok(None);
        };

        let Some(not_on_or_after) = parse_instant(raw) else {
            tracing::debug!(
                request_id = %request_id,
                not_on_or_after = %raw,
                "Ignoring unparseable NotOnOrAfter on LogoutRequest"
            );
            return Ok(None);
        };

        // No deadline means the skew pushes it past the representable range.
        let deadline = i64::try_from(self.config.clock_skew_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|skew| not_on_or_after.checked_add_signed(skew));
        if deadline.is_some_and(|deadline| deadline < self.clock.now()) {
            tracing::warn!(
                request_id = %request_id,
                not_on_or_after = %not_on_or_after,
                "Rejecting expired LogoutRequest"
            );
            return Err(SamlError::MessageExpired { not_on_or_after });
        }

        Ok(Some(not_on_or_after))
    }

    fn read_name_id(&self, root: &XmlElement) -> SamlResult<Option<NameIdentifier>> {
        let Some(element) = root.child(ASSERTION_NAMESPACE, NAME_ID) else {
            return Ok(None);
        };

        if element.text.len() > self.config.max_name_id_length {
            return Err(SamlError::InvalidLogoutRequest(format!(
                "NameID too long (max {})",
                self.config.max_name_id_length
            )));
        }

        let format = element
            .attribute(FORMAT)
            .filter(|f| !f.is_empty())
            .unwrap_or(NAMEID_FORMAT_UNSPECIFIED);

        Ok(Some(NameIdentifier::new(element.text.as_str(), format)))
    }

    fn read_session_index(&self, root: &XmlElement) -> SamlResult<Option<String>> {
        let Some(element) = root.child(PROTOCOL_NAMESPACE, SESSION_INDEX) else {
            return Ok(None);
        };

        if element.text.len() > self.config.max_session_index_length {
            return Err(SamlError::InvalidLogoutRequest(format!(
                "SessionIndex too long (max {})",
                self.config.max_session_index_length
            )));
        }

        Ok(Some(element.text.clone()))
    }
}

fn validate_element_name(root: &XmlElement) -> SamlResult<()> {
    if root.local_name != LOGOUT_REQUEST {
        tracing::warn!(
            root_element = %root.local_name,
            "Rejecting message that is not a LogoutRequest"
        );
        return Err(SamlError::WrongMessageType {
            actual: root.local_name.clone(),
        });
    }
    Ok(())
}
