use super::*;
use chrono::DateTime;
use chrono::Utc;

/// JWT payload carried by both access and refresh tokens.
///
/// The two tokens of a pair share `username`/`day`/`month`/`random`; they
/// differ only in `exp` and the `refresh` marker, which is present on the
/// wire only when true. `user_id` duplicates the username because the
/// scheme has no separate account identifier inside the token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub username: String,
    pub day: String,
    pub month: String,
    pub random: String,
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "omitted")]
    pub refresh: bool,
}

fn omitted(flag: &bool) -> bool {
    !flag
}

impl Claims {
    /// Claims for a short-lived access token issued at `now`.
    pub fn access(username: &str, day: &str, month: &str, random: &str, now: DateTime<Utc>) -> Self {
        Self::stamped(username, day, month, random, now, Crypto::access_duration(), false)
    }

    /// Claims for a long-lived refresh token issued at `now`.
    pub fn refresh(username: &str, day: &str, month: &str, random: &str, now: DateTime<Utc>) -> Self {
        Self::stamped(username, day, month, random, now, Crypto::refresh_duration(), true)
    }

    fn stamped(
        username: &str,
        day: &str,
        month: &str,
        random: &str,
        now: DateTime<Utc>,
        ttl: std::time::Duration,
        refresh: bool,
    ) -> Self {
        Self {
            username: username.to_string(),
            day: day.to_string(),
            month: month.to_string(),
            random: random.to_string(),
            user_id: username.to_string(),
            iat: now.timestamp(),
            exp: now.timestamp() + ttl.as_secs() as i64,
            refresh,
        }
    }

    pub fn expired(&self, now: DateTime<Utc>) -> bool {
        self.exp < now.timestamp()
    }

    /// All claims the scheme requires are present and non-empty.
    pub fn complete(&self) -> bool {
        !self.username.is_empty()
            && !self.day.is_empty()
            && !self.month.is_empty()
            && !self.random.is_empty()
    }
}
