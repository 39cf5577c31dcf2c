//! SAML 2.0 `LogoutRequest` message

use super::envelope::RequestEnvelope;
use crate::clock::Clock;
use crate::error::SamlResult;
use crate::saml::{
    format_instant, read_claim_value, ClaimsIdentity, ClaimsPrincipal, NameIdentifier,
    CLAIM_TYPE_NAME_ID, CLAIM_TYPE_NAME_ID_FORMAT, CLAIM_TYPE_SESSION_INDEX, FORMAT,
    LOGOUT_REQUEST, NAME_ID, NOT_ON_OR_AFTER, REASON, SESSION_INDEX,
};
use crate::services::logout_parser::LogoutRequestReader;
use crate::xml::{write_document, SamlNamespace, XmlNode};
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Default lifetime of an outbound logout request (10 minutes)
pub const DEFAULT_REQUEST_VALIDITY_MINUTES: i64 = 10;

/// Reason for the logout, as a URI reference.
///
/// The string is kept exactly as given and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogoutReason(String);

impl LogoutReason {
    /// The principal initiated the logout
    pub const USER: &'static str = "urn:oasis:names:tc:SAML:2.0:logout:user";
    /// An administrator terminated the session
    pub const ADMIN: &'static str = "urn:oasis:names:tc:SAML:2.0:logout:admin";
    /// The session at the IdP timed out
    pub const GLOBAL_TIMEOUT: &'static str = "urn:oasis:names:tc:SAML:2.0:logout:global-timeout";
    /// The session at an SP timed out
    pub const SP_TIMEOUT: &'static str = "urn:oasis:names:tc:SAML:2.0:logout:sp-timeout";

    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn user() -> Self {
        Self::new(Self::USER)
    }

    #[must_use]
    pub fn admin() -> Self {
        Self::new(Self::ADMIN)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogoutReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A SAML `LogoutRequest`.
///
/// Built implicitly from the local principal's claims
/// ([`LogoutRequest::from_identity`]), explicitly for IdP-initiated logout
/// ([`LogoutRequest::new`]), or read from an inbound document
/// ([`LogoutRequest::read`]). `name_id` and `session_index` cannot change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutRequest {
    envelope: RequestEnvelope,
    not_on_or_after: Option<DateTime<Utc>>,
    reason: Option<LogoutReason>,
    name_id: Option<NameIdentifier>,
    session_index: Option<String>,
}

impl LogoutRequest {
    /// Build an IdP-initiated logout request for a known principal and session.
    #[must_use]
    pub fn new(name_id: NameIdentifier, session_index: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            envelope: RequestEnvelope::new(clock),
            not_on_or_after: Some(default_not_on_or_after(clock)),
            reason: None,
            name_id: Some(name_id),
            session_index: Some(session_index.into()),
        }
    }

    /// Build a logout request for the local principal from its claims.
    ///
    /// An unauthenticated identity leaves `name_id` and `session_index`
    /// unset. An authenticated one must carry the `NameId`, `NameIdFormat`
    /// and `SessionIndex` claims, otherwise [`SamlError::MissingClaim`] is
    /// returned.
    ///
    /// [`SamlError::MissingClaim`]: crate::SamlError::MissingClaim
    pub fn from_identity(identity: &ClaimsIdentity, clock: &dyn Clock) -> SamlResult<Self> {
        let (name_id, session_index) = if identity.is_authenticated() {
            let name_id = NameIdentifier::new(
                read_claim_value(identity, CLAIM_TYPE_NAME_ID)?,
                read_claim_value(identity, CLAIM_TYPE_NAME_ID_FORMAT)?,
            );
            let session_index = read_claim_value(identity, CLAIM_TYPE_SESSION_INDEX)?;
            (Some(name_id), Some(session_index.to_string()))
        } else {
            (None, None)
        };

        Ok(Self {
            envelope: RequestEnvelope::new(clock),
            not_on_or_after: Some(default_not_on_or_after(clock)),
            reason: None,
            name_id,
            session_index,
        })
    }

    /// Same as [`LogoutRequest::from_identity`] using the principal's first
    /// identity. A principal without identities is treated as unauthenticated.
    pub fn from_principal(principal: &ClaimsPrincipal, clock: &dyn Clock) -> SamlResult<Self> {
        match principal.primary_identity() {
            Some(identity) => Self::from_identity(identity, clock),
            None => Self::from_identity(&ClaimsIdentity::anonymous(), clock),
        }
    }

    pub(crate) fn from_parts(
        envelope: RequestEnvelope,
        not_on_or_after: Option<DateTime<Utc>>,
        reason: Option<LogoutReason>,
        name_id: Option<NameIdentifier>,
        session_index: Option<String>,
    ) -> Self {
        Self {
            envelope,
            not_on_or_after,
            reason,
            name_id,
            session_index,
        }
    }

    /// Parse and validate an inbound request with default limits and no
    /// signature verification.
    pub fn read(xml: &str, clock: &dyn Clock) -> SamlResult<Self> {
        LogoutRequestReader::new(clock).read(xml)
    }

    #[must_use]
    pub fn with_reason(mut self, reason: LogoutReason) -> Self {
        self.reason = Some(reason);
        self
    }

    #[must_use]
    pub fn with_not_on_or_after(mut self, not_on_or_after: Option<DateTime<Utc>>) -> Self {
        self.not_on_or_after = not_on_or_after;
        self
    }

    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.envelope.set_issuer(issuer);
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.envelope.set_destination(destination);
        self
    }

    pub fn set_not_on_or_after(&mut self, not_on_or_after: Option<DateTime<Utc>>) {
        self.not_on_or_after = not_on_or_after;
    }

    pub fn set_reason(&mut self, reason: Option<LogoutReason>) {
        self.reason = reason;
    }

    #[must_use]
    pub fn envelope(&self) -> &RequestEnvelope {
        &self.envelope
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.envelope.id()
    }

    #[must_use]
    pub fn not_on_or_after(&self) -> Option<DateTime<Utc>> {
        self.not_on_or_after
    }

    #[must_use]
    pub fn reason(&self) -> Option<&LogoutReason> {
        self.reason.as_ref()
    }

    #[must_use]
    pub fn name_id(&self) -> Option<&NameIdentifier> {
        self.name_id.as_ref()
    }

    #[must_use]
    pub fn session_index(&self) -> Option<&str> {
        self.session_index.as_deref()
    }

    /// Message-specific content in schema order: `NotOnOrAfter` and `Reason`
    /// attributes, then `saml:NameID` and `samlp:SessionIndex` elements.
    /// Only set fields produce a node.
    pub fn content(&self) -> impl Iterator<Item = XmlNode> + '_ {
        let not_on_or_after = self
            .not_on_or_after
            .iter()
            .map(|t| XmlNode::attribute(NOT_ON_OR_AFTER, format_instant(t)));

        let reason = self
            .reason
            .iter()
            .map(|r| XmlNode::attribute(REASON, r.as_str()));

        let name_id = self.name_id.iter().map(|n| {
            XmlNode::element(SamlNamespace::Assertion, NAME_ID, n.value())
                .with_attribute(FORMAT, n.format())
        });

        let session_index = self
            .session_index
            .iter()
            .map(|s| XmlNode::element(SamlNamespace::Protocol, SESSION_INDEX, s.as_str()));

        not_on_or_after
            .chain(reason)
            .chain(name_id)
            .chain(session_index)
    }

    /// Serialize to a `samlp:LogoutRequest` document.
    pub fn to_xml(&self) -> SamlResult<String> {
        let xml = write_document(
            SamlNamespace::Protocol,
            LOGOUT_REQUEST,
            self.envelope.content().chain(self.content()),
        )?;

        tracing::debug!(
            request_id = %self.id(),
            has_name_id = self.name_id.is_some(),
            has_session_index = self.session_index.is_some(),
            "Built SAML LogoutRequest"
        );

        Ok(xml)
    }
}

fn default_not_on_or_after(clock: &dyn Clock) -> DateTime<Utc> {
    clock.now() + Duration::minutes(DEFAULT_REQUEST_VALIDITY_MINUTES)
}
