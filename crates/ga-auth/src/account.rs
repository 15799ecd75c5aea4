use chrono::DateTime;
use chrono::Utc;
use ga_core::ID;
use ga_core::Unique;

/// Registered player account with its gaming profile.
///
/// The password hash is a database-only column, not a field of the
/// domain type.
#[derive(Debug, Clone)]
pub struct GameAccount {
    pub(crate) id: ID<Self>,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) active: bool,
    pub(crate) display_name: Option<String>,
    pub(crate) character_name: Option<String>,
    pub(crate) level: i32,
    pub(crate) experience_points: i64,
    pub(crate) coins: i64,
    pub(crate) gems: i64,
    pub(crate) current_stage: i32,
    pub(crate) rank_tier: String,
    pub(crate) games_played: i64,
    pub(crate) games_won: i64,
    pub(crate) highest_score: i64,
    pub(crate) guild_name: Option<String>,
    pub(crate) last_login: Option<DateTime<Utc>>,
}

impl GameAccount {
    /// A brand-new account with fresh-player defaults.
    pub fn new(id: ID<Self>, username: String, email: String, display_name: Option<String>) -> Self {
        Self {
            id,
            username,
            email,
            active: true,
            display_name,
            character_name: None,
            level: 1,
            experience_points: 0,
            coins: 0,
            gems: 0,
            current_stage: 1,
            rank_tier: "Bronze".to_string(),
            games_played: 0,
            games_won: 0,
            highest_score: 0,
            guild_name: None,
            last_login: None,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl Unique for GameAccount {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use ga_pg::*;

    impl Schema for GameAccount {
        fn name() -> &'static str {
            ACCOUNTS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                ACCOUNTS,
                " (
                    id                 UUID PRIMARY KEY,
                    username           VARCHAR(150) UNIQUE NOT NULL,
                    email              VARCHAR(255) UNIQUE NOT NULL,
                    hashword           TEXT NOT NULL,
                    is_active          BOOLEAN NOT NULL DEFAULT TRUE,
                    display_name       VARCHAR(100),
                    character_name     VARCHAR(100),
                    level              INTEGER NOT NULL DEFAULT 1,
                    experience_points  BIGINT NOT NULL DEFAULT 0,
                    coins              BIGINT NOT NULL DEFAULT 0,
                    gems               BIGINT NOT NULL DEFAULT 0,
                    current_stage      INTEGER NOT NULL DEFAULT 1,
                    rank_tier          VARCHAR(50) NOT NULL DEFAULT 'Bronze',
                    games_played       BIGINT NOT NULL DEFAULT 0,
                    games_won          BIGINT NOT NULL DEFAULT 0,
                    highest_score      BIGINT NOT NULL DEFAULT 0,
                    guild_name         VARCHAR(100),
                    last_login_at      TIMESTAMPTZ
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_accounts_username ON ",
                ACCOUNTS,
                " (username);
                 CREATE INDEX IF NOT EXISTS idx_accounts_email ON ",
                ACCOUNTS,
                " (email);"
            )
        }
    }

    impl From<&tokio_postgres::Row> for GameAccount {
        fn from(row: &tokio_postgres::Row) -> Self {
            Self {
                id: ID::from(row.get::<_, uuid::Uuid>("id")),
                username: row.get("username"),
                email: row.get("email"),
                active: row.get("is_active"),
                display_name: row.get("display_name"),
                character_name: row.get("character_name"),
                level: row.get("level"),
                experience_points: row.get("experience_points"),
                coins: row.get("coins"),
                gems: row.get("gems"),
                current_stage: row.get("current_stage"),
                rank_tier: row.get("rank_tier"),
                games_played: row.get("games_played"),
                games_won: row.get("games_won"),
                highest_score: row.get("highest_score"),
                guild_name: row.get("guild_name"),
                last_login: row.get("last_login_at"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_accounts_start_at_level_one() {
        let account = GameAccount::new(
            ID::default(),
            "player123".to_string(),
            "player@example.com".to_string(),
            Some("PlayerOne".to_string()),
        );
        assert!(account.is_active());
        assert_eq!(account.level, 1);
        assert_eq!(account.rank_tier, "Bronze");
        assert_eq!(account.display_name(), Some("PlayerOne"));
        assert!(account.last_login.is_none());
    }
}
