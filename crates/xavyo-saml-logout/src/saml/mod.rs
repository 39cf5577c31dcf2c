//! SAML-specific types and protocol constants

pub mod claims;
pub mod name_id;

pub use claims::{
    read_claim_value, Claim, ClaimsIdentity, ClaimsPrincipal, CLAIM_TYPE_NAME_ID,
    CLAIM_TYPE_NAME_ID_FORMAT, CLAIM_TYPE_SESSION_INDEX,
};
pub use name_id::{
    NameIdentifier, NAMEID_FORMAT_EMAIL, NAMEID_FORMAT_PERSISTENT,
    NAMEID_FORMAT_TRANSIENT, NAMEID_FORMAT_UNSPECIFIED,
};

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// SAML 2.0 protocol namespace (`samlp`)
pub const PROTOCOL_NAMESPACE: &str = "urn:oasis:names:tc:SAML:2.0:protocol";

/// SAML 2.0 assertion namespace (`saml`)
pub const ASSERTION_NAMESPACE: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

pub const SAML_VERSION: &str = "2.0";

// Element and attribute names
pub const LOGOUT_REQUEST: &str = "LogoutRequest";
pub const ISSUER: &str = "Issuer";
pub const NAME_ID: &str = "NameID";
pub const SESSION_INDEX: &str = "SessionIndex";
pub const ID: &str = "ID";
pub const VERSION: &str = "Version";
pub const ISSUE_INSTANT: &str = "IssueInstant";
pub const DESTINATION: &str = "Destination";
pub const NOT_ON_OR_AFTER: &str = "NotOnOrAfter";
pub const REASON: &str = "Reason";
pub const FORMAT: &str = "Format";

/// Format an instant as an `xsd:dateTime` in UTC, keeping sub-second precision.
#[must_use]
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an `xsd:dateTime` and normalize it to UTC.
///
/// Values with an explicit offset are converted; values without one are
/// taken as UTC. Returns `None` for anything else.
#[must_use]
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
