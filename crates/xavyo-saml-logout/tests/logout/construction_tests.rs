//! Implicit and explicit LogoutRequest construction tests

#[cfg(test)]
mod tests {
    use super::super::common::{sp_user_identity, test_clock, test_instant};
    use chrono::{Duration, Utc};
    use xavyo_saml_logout::saml::{CLAIM_TYPE_NAME_ID, CLAIM_TYPE_NAME_ID_FORMAT};
    use xavyo_saml_logout::{
        ClaimsIdentity, ClaimsPrincipal, LogoutRequest, NameIdentifier, SamlError, SystemClock,
        NAMEID_FORMAT_PERSISTENT,
    };

    // ============================================================
    // Explicit (IdP-initiated) construction
    // ============================================================

    #[test]
    fn test_default_expiry_is_ten_minutes() {
        let before = Utc::now();
        let request = LogoutRequest::new(
            NameIdentifier::new("id-1", NAMEID_FORMAT_PERSISTENT),
            "sess1",
            &SystemClock,
        );
        let after = Utc::now();

        let not_on_or_after = request.not_on_or_after().unwrap();
        assert!(not_on_or_after >= before + Duration::minutes(10));
        assert!(not_on_or_after <= after + Duration::minutes(10));
    }

    #[test]
    fn test_explicit_construction_skips_claims() {
        let name_id = NameIdentifier::new("id-1", NAMEID_FORMAT_PERSISTENT);
        let request = LogoutRequest::new(name_id.clone(), "sess1", &test_clock());

        assert_eq!(request.name_id(), Some(&name_id));
        assert_eq!(request.session_index(), Some("sess1"));
        assert_eq!(request.envelope().issue_instant(), test_instant());
        assert!(request.id().starts_with("_lr_"));
    }

    #[test]
    fn test_each_request_gets_unique_id() {
        let a = LogoutRequest::new(NameIdentifier::new("u", "f"), "s", &test_clock());
        let b = LogoutRequest::new(NameIdentifier::new("u", "f"), "s", &test_clock());
        assert_ne!(a.id(), b.id());
    }

    // ============================================================
    // Implicit (claims) construction
    // ============================================================

    #[test]
    fn test_claims_derived_identity() {
        let request = LogoutRequest::from_identity(&sp_user_identity(), &test_clock()).unwrap();

        let name_id = request.name_id().unwrap();
        assert_eq!(name_id.value(), "urn:x");
        assert_eq!(name_id.format(), "urn:format:y");
        assert_eq!(request.session_index(), Some("abc"));
        assert_eq!(
            request.not_on_or_after(),
            Some(test_instant() + Duration::minutes(10))
        );
    }

    #[test]
    fn test_unauthenticated_identity_leaves_fields_unset() {
        let request =
            LogoutRequest::from_identity(&ClaimsIdentity::anonymous(), &test_clock()).unwrap();
        assert!(request.name_id().is_none());
        assert!(request.session_index().is_none());
    }

    #[test]
    fn test_missing_session_index_claim() {
        let identity = ClaimsIdentity::authenticated(vec![])
            .with_claim(CLAIM_TYPE_NAME_ID, "urn:x")
            .with_claim(CLAIM_TYPE_NAME_ID_FORMAT, "urn:format:y");

        match LogoutRequest::from_identity(&identity, &test_clock()) {
            Err(SamlError::MissingClaim(claim_type)) => assert_eq!(claim_type, "SessionIndex"),
            other => panic!("Expected MissingClaim error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_name_id_claim() {
        let identity = ClaimsIdentity::authenticated(vec![]);
        let err = LogoutRequest::from_identity(&identity, &test_clock()).unwrap_err();
        assert!(matches!(err, SamlError::MissingClaim(ref t) if t == "NameId"));
    }

    #[test]
    fn test_principal_uses_first_identity() {
        let principal = ClaimsPrincipal::new(vec![ClaimsIdentity::anonymous(), sp_user_identity()]);
        let request = LogoutRequest::from_principal(&principal, &test_clock()).unwrap();
        assert!(request.name_id().is_none());

        let principal = ClaimsPrincipal::from(sp_user_identity());
        let request = LogoutRequest::from_principal(&principal, &test_clock()).unwrap();
        assert_eq!(request.session_index(), Some("abc"));
    }
}
