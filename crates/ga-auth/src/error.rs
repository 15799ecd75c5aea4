/// Failure kinds for credential derivation and the token lifecycle.
///
/// The deriver and codec raise the most specific kind; [`Protocol`] and
/// the request extractor fold lower-level kinds into protocol-level
/// outcomes ([`AuthError::InvalidCredentials`] /
/// [`AuthError::AuthenticationFailed`]) so derivation internals never
/// leak past the wire boundary.
///
/// [`Protocol`]: crate::Protocol
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The client-supplied random value is not an 8-digit numeric string.
    #[error("random must be an 8-digit numeric string")]
    InvalidSeed,
    /// Derived values mismatch, or refresh-token semantics violated.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Token signature does not verify against the signing key.
    #[error("token signature verification failed")]
    InvalidSignature,
    /// Token is past its expiry claim.
    #[error("token has expired")]
    TokenExpired,
    /// Token structure or claims are unparsable, or required claims are
    /// missing or empty.
    #[error("malformed token")]
    MalformedToken,
    /// Bearer scheme present but the header carries no single token.
    #[error("invalid token header, no credentials provided")]
    MalformedHeader,
    /// Umbrella for any decode-time failure surfaced to callers.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
}

impl AuthError {
    /// Wraps a lower-level failure in the umbrella kind, preserving the
    /// underlying reason as text.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::AuthenticationFailed(reason.to_string())
    }
}
