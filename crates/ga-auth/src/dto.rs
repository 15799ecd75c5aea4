use super::*;
use ga_core::Unique;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
    pub day: String,
    pub month: String,
    pub random: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// The issued pair, returned as opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub display_name: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account payload returned to clients. Excludes the password hash and
/// bookkeeping timestamps.
#[derive(Debug, Serialize)]
pub struct AccountInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub display_name: Option<String>,
    pub character_name: Option<String>,
    pub level: i32,
    pub experience_points: i64,
    pub coins: i64,
    pub gems: i64,
    pub current_stage: i32,
    pub rank_tier: String,
    pub games_played: i64,
    pub games_won: i64,
    pub highest_score: i64,
    pub guild_name: Option<String>,
    pub last_login_at: Option<String>,
}

impl From<&GameAccount> for AccountInfo {
    fn from(account: &GameAccount) -> Self {
        Self {
            id: account.id().to_string(),
            username: account.username().to_string(),
            email: account.email().to_string(),
            is_active: account.is_active(),
            display_name: account.display_name.clone(),
            character_name: account.character_name.clone(),
            level: account.level,
            experience_points: account.experience_points,
            coins: account.coins,
            gems: account.gems,
            current_stage: account.current_stage,
            rank_tier: account.rank_tier.clone(),
            games_played: account.games_played,
            games_won: account.games_won,
            highest_score: account.highest_score,
            guild_name: account.guild_name.clone(),
            last_login_at: account.last_login.map(|at| at.to_rfc3339()),
        }
    }
}
