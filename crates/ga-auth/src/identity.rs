use super::*;

/// Authenticated identity for a single request.
///
/// Built from successfully decoded claims and dropped when the request
/// completes; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    username: String,
    day: String,
    month: String,
    random: String,
}

impl Identity {
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn day(&self) -> &str {
        &self.day
    }
    pub fn month(&self) -> &str {
        &self.month
    }
    pub fn random(&self) -> &str {
        &self.random
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            day: claims.day,
            month: claims.month,
            random: claims.random,
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
