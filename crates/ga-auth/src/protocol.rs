use super::*;

/// Token obtain/refresh state machine.
///
/// Stateless: every call recomputes the expected credentials from the
/// clock and its inputs, so concurrent requests are independent and a
/// day rollover between two calls is handled by construction.
#[derive(Clone)]
pub struct Protocol {
    crypto: Crypto,
}

impl Protocol {
    pub fn new(crypto: Crypto) -> Self {
        Self { crypto }
    }

    /// Verifies the date-derived client credentials and issues a fresh
    /// access/refresh pair.
    ///
    /// All four presented values must match the server-side derivation
    /// exactly (case-sensitive): username and password against the
    /// deriver, day and month against today's lowercase full names.
    pub fn obtain(
        &self,
        username: &str,
        password: &str,
        day: &str,
        month: &str,
        random: &str,
    ) -> Result<TokenPair, AuthError> {
        let now = self.crypto.now();
        let today = now.date_naive();
        let expected_username = credentials::expected_username(today);
        let expected_password = credentials::expected_password(today, random)?;
        let expected_day = today.format("%A").to_string().to_lowercase();
        let expected_month = today.format("%B").to_string().to_lowercase();
        log::debug!("expected username {} for {}", expected_username, today);
        if username != expected_username
            || password != expected_password
            || day != expected_day
            || month != expected_month
        {
            return Err(AuthError::InvalidCredentials);
        }
        self.issue(username, day, month, random)
    }

    /// Exchanges a still-valid refresh token for a brand-new pair.
    ///
    /// Reissue is unconditional: the presented token is not invalidated
    /// and no latest-issued record is consulted, so an unexpired refresh
    /// token can be replayed. That matches the protocol this implements;
    /// revocation lives outside this crate.
    pub fn refresh(&self, token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.crypto.decode(token)?;
        if !claims.refresh || !claims.complete() {
            return Err(AuthError::InvalidCredentials);
        }
        self.issue(&claims.username, &claims.day, &claims.month, &claims.random)
    }

    fn issue(&self, username: &str, day: &str, month: &str, random: &str) -> Result<TokenPair, AuthError> {
        let now = self.crypto.now();
        let access = self.crypto.encode(&Claims::access(username, day, month, random, now))?;
        let refresh = self.crypto.encode(&Claims::refresh(username, day, month, random, now))?;
        Ok(TokenPair { access, refresh })
    }

    pub fn crypto(&self) -> &Crypto {
        &self.crypto
    }
}
