//! Inbound LogoutRequest validation tests

#[cfg(test)]
mod tests {
    use super::super::common::{inbound_document, test_clock};
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use xavyo_saml_logout::{
        LogoutRequest, LogoutRequestConfig, LogoutRequestReader, SamlError, SamlResult,
        SignatureVerifier,
    };

    // ============================================================
    // Element identity
    // ============================================================

    #[test]
    fn test_logout_response_rejected() {
        let xml = inbound_document("LogoutResponse", "");
        let err = LogoutRequest::read(&xml, &test_clock()).unwrap_err();
        assert!(matches!(err, SamlError::WrongMessageType { .. }));
        assert!(err.to_string().contains("Not a SAML2 Logout Request"));
    }

    #[test]
    fn test_wrong_element_wins_over_expiry() {
        let xml = inbound_document("LogoutResponse", r#"NotOnOrAfter="2000-01-01T00:00:00Z""#);
        let err = LogoutRequest::read(&xml, &test_clock()).unwrap_err();
        assert!(matches!(err, SamlError::WrongMessageType { .. }));
    }

    #[test]
    fn test_wrong_element_without_envelope_attributes() {
        let xml = r#"<samlp:LogoutResponse xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol"/>"#;
        let err = LogoutRequest::read(xml, &test_clock()).unwrap_err();
        assert!(matches!(err, SamlError::WrongMessageType { .. }));
    }

    // ============================================================
    // NotOnOrAfter
    // ============================================================

    #[test]
    fn test_expired_request_rejected() {
        let xml = inbound_document("LogoutRequest", r#"NotOnOrAfter="2000-01-01T00:00:00Z""#);
        match LogoutRequest::read(&xml, &test_clock()) {
            Err(SamlError::MessageExpired { not_on_or_after }) => {
                assert_eq!(
                    not_on_or_after,
                    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
                );
            }
            other => panic!("Expected MessageExpired error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_timestamp_tolerated() {
        let xml = inbound_document("LogoutRequest", r#"NotOnOrAfter="not-a-date""#);
        let request = LogoutRequest::read(&xml, &test_clock()).unwrap();
        assert!(request.not_on_or_after().is_none());
        assert_eq!(request.session_index(), Some("_session_1"));
    }

    #[test]
    fn test_offset_timestamp_normalized_to_utc() {
        let xml = inbound_document("LogoutRequest", r#"NotOnOrAfter="2026-02-21T12:05:00+02:00""#);
        let request = LogoutRequest::read(&xml, &test_clock()).unwrap();
        assert_eq!(
            request.not_on_or_after(),
            Some(Utc.with_ymd_and_hms(2026, 2, 21, 10, 5, 0).unwrap())
        );
    }

    #[test]
    fn test_absent_timestamp_is_valid() {
        let xml = inbound_document("LogoutRequest", "");
        let request = LogoutRequest::read(&xml, &test_clock()).unwrap();
        assert!(request.not_on_or_after().is_none());
    }

    // ============================================================
    // Envelope and structure
    // ============================================================

    #[test]
    fn test_malformed_xml_rejected() {
        let err = LogoutRequest::read("<samlp:LogoutRequest", &test_clock()).unwrap_err();
        assert!(matches!(err, SamlError::InvalidLogoutRequest(_)));
    }

    #[test]
    fn test_missing_issue_instant_rejected() {
        let xml = r#"<samlp:LogoutRequest xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol"
    ID="_lr_1" Version="2.0"/>"#;
        let err = LogoutRequest::read(xml, &test_clock()).unwrap_err();
        assert!(err.to_string().contains("Missing IssueInstant"));
    }

    #[test]
    fn test_name_id_in_wrong_namespace_ignored() {
        let xml = r#"<samlp:LogoutRequest xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol"
    ID="_lr_1" Version="2.0" IssueInstant="2026-02-21T10:00:00Z">
    <samlp:NameID>user@example.com</samlp:NameID>
</samlp:LogoutRequest>"#;
        let request = LogoutRequest::read(xml, &test_clock()).unwrap();
        assert!(request.name_id().is_none());
    }

    #[test]
    fn test_name_id_length_limit() {
        let config = LogoutRequestConfig {
            max_name_id_length: 8,
            ..Default::default()
        };
        let xml = inbound_document("LogoutRequest", "");
        let clock = test_clock();
        let err = LogoutRequestReader::new(&clock)
            .with_config(config)
            .read(&xml)
            .unwrap_err();
        assert!(err.to_string().contains("NameID too long"));
    }

    // ============================================================
    // Signature verification hook
    // ============================================================

    struct CountingVerifier {
        calls: AtomicUsize,
    }

    impl SignatureVerifier for CountingVerifier {
        fn verify(&self, xml: &str) -> SamlResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(xml.contains("LogoutRequest"));
            Ok(())
        }
    }

    #[test]
    fn test_verifier_called_once_per_read() {
        let verifier = CountingVerifier {
            calls: AtomicUsize::new(0),
        };
        let clock = test_clock();
        let reader = LogoutRequestReader::new(&clock).with_signature_verifier(&verifier);

        let xml = inbound_document("LogoutRequest", "");
        reader.read(&xml).unwrap();
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_verifier_not_called_for_wrong_element() {
        let verifier = CountingVerifier {
            calls: AtomicUsize::new(0),
        };
        let clock = test_clock();
        let reader = LogoutRequestReader::new(&clock).with_signature_verifier(&verifier);

        let xml = inbound_document("AuthnRequest", "");
        assert!(reader.read(&xml).is_err());
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }
}
