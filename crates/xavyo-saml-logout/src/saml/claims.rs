//! Claims-based identity of the local principal
//!
//! The host application owns authentication; it hands the current identity to
//! the message constructors instead of this crate reading any global state.

use crate::error::{SamlError, SamlResult};
use serde::{Deserialize, Serialize};

/// Claim carrying the principal's `NameID` value
pub const CLAIM_TYPE_NAME_ID: &str = "NameId";

/// Claim carrying the principal's `NameID` format
pub const CLAIM_TYPE_NAME_ID_FORMAT: &str = "NameIdFormat";

/// Claim carrying the session index issued at login
pub const CLAIM_TYPE_SESSION_INDEX: &str = "SessionIndex";

/// A single `(type, value)` claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// An identity with its authentication state and claims
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsIdentity {
    authenticated: bool,
    claims: Vec<Claim>,
}

impl ClaimsIdentity {
    /// An authenticated identity carrying the given claims.
    #[must_use]
    pub fn authenticated(claims: Vec<Claim>) -> Self {
        Self {
            authenticated: true,
            claims,
        }
    }

    /// An unauthenticated identity with no claims.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Add a claim.
    #[must_use]
    pub fn with_claim(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.push(Claim::new(claim_type, value));
        self
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// First claim of the given type, if any.
    #[must_use]
    pub fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }
}

/// A principal holding one or more identities; the first one is primary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsPrincipal {
    identities: Vec<ClaimsIdentity>,
}

impl ClaimsPrincipal {
    #[must_use]
    pub fn new(identities: Vec<ClaimsIdentity>) -> Self {
        Self { identities }
    }

    #[must_use]
    pub fn primary_identity(&self) -> Option<&ClaimsIdentity> {
        self.identities.first()
    }
}

impl From<ClaimsIdentity> for ClaimsPrincipal {
    fn from(identity: ClaimsIdentity) -> Self {
        Self::new(vec![identity])
    }
}

/// Read the value of the first claim of `claim_type`.
///
/// Callers check [`ClaimsIdentity::is_authenticated`] first; this function
/// does not look at the authentication state.
pub fn read_claim_value<'a>(identity: &'a ClaimsIdentity, claim_type: &str) -> SamlResult<&'a str> {
    identity
        .find_first(claim_type)
        .map(|c| c.value.as_str())
        .ok_or_else(|| SamlError::MissingClaim(claim_type.to_string()))
}
