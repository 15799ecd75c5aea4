use super::*;

/// Outcome of inspecting an Authorization header.
///
/// `Ok(None)` means no bearer credentials were presented; the caller may
/// fall back to another mechanism or reject, but nothing failed here.
pub fn authenticate(crypto: &Crypto, header: Option<&str>) -> Result<Option<Identity>, AuthError> {
    let Some(header) = header else {
        return Ok(None);
    };
    let mut words = header.split_whitespace();
    let Some(scheme) = words.next() else {
        return Ok(None);
    };
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Ok(None);
    }
    let token = match (words.next(), words.next()) {
        (Some(token), None) => token,
        _ => return Err(AuthError::MalformedHeader),
    };
    let claims = crypto.decode(token).map_err(AuthError::failed)?;
    if !claims.complete() {
        return Err(AuthError::failed(AuthError::MalformedToken));
    }
    log::debug!("authenticated bearer token for {}", claims.username);
    Ok(Some(Identity::from(claims)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use chrono::TimeZone;
    use chrono::Utc;
    use std::sync::Arc;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 2, 12, 0, 0).unwrap()
    }

    fn crypto() -> Crypto {
        Crypto::new(b"test-signing-key", Arc::new(FixedClock(noon())))
    }

    fn bearer_token() -> String {
        let claims = Claims::access("woecdtnoebsedr", "wednesday", "october", "12345678", noon());
        crypto().encode(&claims).unwrap()
    }

    #[test]
    fn absent_header_presents_no_credentials() {
        assert!(authenticate(&crypto(), None).unwrap().is_none());
    }

    #[test]
    fn empty_header_presents_no_credentials() {
        assert!(authenticate(&crypto(), Some("")).unwrap().is_none());
        assert!(authenticate(&crypto(), Some("   ")).unwrap().is_none());
    }

    #[test]
    fn foreign_scheme_presents_no_credentials() {
        assert!(authenticate(&crypto(), Some("Basic xyz")).unwrap().is_none());
    }

    #[test]
    fn scheme_without_token_is_malformed() {
        assert!(matches!(
            authenticate(&crypto(), Some("Bearer")),
            Err(AuthError::MalformedHeader)
        ));
    }

    #[test]
    fn scheme_with_extra_tokens_is_malformed() {
        assert!(matches!(
            authenticate(&crypto(), Some("Bearer a b")),
            Err(AuthError::MalformedHeader)
        ));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let header = format!("bEaReR {}", bearer_token());
        let identity = authenticate(&crypto(), Some(&header)).unwrap().unwrap();
        assert_eq!(identity.username(), "woecdtnoebsedr");
        assert_eq!(identity.day(), "wednesday");
        assert_eq!(identity.month(), "october");
        assert_eq!(identity.random(), "12345678");
    }

    #[test]
    fn decode_failures_surface_as_authentication_failed() {
        assert!(matches!(
            authenticate(&crypto(), Some("Bearer garbage")),
            Err(AuthError::AuthenticationFailed(_))
        ));
    }

    #[test]
    fn expired_token_surfaces_its_reason() {
        let header = format!("Bearer {}", bearer_token());
        let later = Crypto::new(
            b"test-signing-key",
            Arc::new(FixedClock(noon() + chrono::Duration::days(2))),
        );
        match authenticate(&later, Some(&header)) {
            Err(AuthError::AuthenticationFailed(reason)) => {
                assert!(reason.contains("expired"));
            }
            other => panic!("expected authentication failure, got {:?}", other.map(|_| ())),
        }
    }
}
