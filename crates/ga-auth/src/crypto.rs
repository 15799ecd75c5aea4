use super::*;
use chrono::DateTime;
use chrono::Utc;
use std::sync::Arc;

const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);
const REFRESH_TOKEN_DURATION: std::time::Duration =
    std::time::Duration::from_secs(7 * 24 * 60 * 60);

/// HS256 token signing and verification.
///
/// Expiry is judged against the injected [`Clock`] rather than the
/// library's wall clock, so token lifetimes are testable. The issued-at
/// claim is stamped but never verified on decode: an intentional
/// relaxation that keeps clients with skewed clocks from being locked
/// out.
#[derive(Clone)]
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    clock: Arc<dyn Clock>,
}

impl Crypto {
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            clock,
        }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| String::default())
                .as_bytes(),
            Arc::new(SystemClock),
        )
    }
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
            .map_err(|_| AuthError::MalformedToken)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        // exp is checked below against the injected clock; the library
        // validator would consult wall time and add leeway
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = std::collections::HashSet::new();
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(classify)?;
        if claims.expired(self.now()) {
            return Err(AuthError::TokenExpired);
        }
        if !claims.complete() {
            return Err(AuthError::MalformedToken);
        }
        Ok(claims)
    }
    pub const fn access_duration() -> std::time::Duration {
        ACCESS_TOKEN_DURATION
    }
    pub const fn refresh_duration() -> std::time::Duration {
        REFRESH_TOKEN_DURATION
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::MalformedToken,
    }
}
