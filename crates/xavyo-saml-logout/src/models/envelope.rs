//! Fields shared by every SAML protocol request
//!
//! `ID`, `Version`, `IssueInstant` and `Destination` attributes plus the
//! optional `saml:Issuer` child. Message types compose this with their own
//! content when serializing and call [`RequestEnvelope::read`] when parsing.

use crate::clock::Clock;
use crate::config::LogoutRequestConfig;
use crate::error::{SamlError, SamlResult};
use crate::saml::{
    format_instant, parse_instant, ASSERTION_NAMESPACE, DESTINATION, ID, ISSUER, ISSUE_INSTANT,
    SAML_VERSION, VERSION,
};
use crate::xml::{SamlNamespace, XmlElement, XmlNode};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    id: String,
    version: String,
    issue_instant: DateTime<Utc>,
    issuer: Option<String>,
    destination: Option<String>,
}

impl RequestEnvelope {
    /// New envelope with a fresh `_lr_` prefixed ID issued now.
    #[must_use]
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            id: format!("_lr_{}", Uuid::new_v4()),
            version: SAML_VERSION.to_string(),
            issue_instant: clock.now(),
            issuer: None,
            destination: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn issue_instant(&self) -> DateTime<Utc> {
        self.issue_instant
    }

    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn set_issuer(&mut self, issuer: impl Into<String>) {
        self.issuer = Some(issuer.into());
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = Some(destination.into());
    }

    /// Envelope attributes followed by the `Issuer` element, if set.
    pub fn content(&self) -> impl Iterator<Item = XmlNode> + '_ {
        [
            XmlNode::attribute(ID, self.id.as_str()),
            XmlNode::attribute(VERSION, self.version.as_str()),
            XmlNode::attribute(ISSUE_INSTANT, format_instant(&self.issue_instant)),
        ]
        .into_iter()
        .chain(
            self.destination
                .iter()
                .map(|d| XmlNode::attribute(DESTINATION, d.as_str())),
        )
        .chain(
            self.issuer
                .iter()
                .map(|i| XmlNode::element(SamlNamespace::Assertion, ISSUER, i.as_str())),
        )
    }

    /// Read the envelope fields from a parsed root element.
    pub fn read(root: &XmlElement, config: &LogoutRequestConfig) -> SamlResult<Self> {
        let id = root
            .attribute(ID)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SamlError::InvalidLogoutRequest("Missing ID attribute".to_string()))?;
        if id.len() > config.max_id_length {
            return Err(SamlError::InvalidLogoutRequest(format!(
                "ID attribute exceeds maximum length of {} characters",
                config.max_id_length
            )));
        }

        let version = root.attribute(VERSION).ok_or_else(|| {
            SamlError::InvalidLogoutRequest("Missing Version attribute".to_string())
        })?;
        if version != SAML_VERSION {
            return Err(SamlError::InvalidLogoutRequest(format!(
                "Unsupported SAML version: {version}"
            )));
        }

        let issue_instant_raw = root.attribute(ISSUE_INSTANT).ok_or_else(|| {
            SamlError::InvalidLogoutRequest("Missing IssueInstant attribute".to_string())
        })?;
        let issue_instant = parse_instant(issue_instant_raw).ok_or_else(|| {
            SamlError::InvalidLogoutRequest(format!(
                "Invalid IssueInstant format: {issue_instant_raw}"
            ))
        })?;

        let issuer = root
            .child(ASSERTION_NAMESPACE, ISSUER)
            .map(|e| e.text.clone());
        if let Some(ref issuer) = issuer {
            if issuer.len() > config.max_issuer_length {
                return Err(SamlError::InvalidLogoutRequest(format!(
                    "Issuer exceeds maximum length of {} characters",
                    config.max_issuer_length
                )));
            }
        }

        Ok(Self {
            id: id.to_string(),
            version: version.to_string(),
            issue_instant,
            issuer,
            destination: root.attribute(DESTINATION).map(String::from),
        })
    }
}
