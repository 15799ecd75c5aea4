use super::*;
use chrono::DateTime;
use chrono::Utc;
use ga_core::ID;
use ga_core::Unique;
use ga_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for account persistence.
/// Abstracts SQL from domain modules.
#[allow(async_fn_in_trait)]
pub trait AccountRepository {
    async fn exists(&self, username: &str, email: &str) -> Result<bool, PgErr>;
    async fn create(&self, account: &GameAccount, hashword: &str) -> Result<(), PgErr>;
    /// Finds an account and its stored hash by username or email.
    async fn lookup(&self, identifier: &str) -> Result<Option<(GameAccount, String)>, PgErr>;
    async fn fetch(&self, username: &str) -> Result<Option<GameAccount>, PgErr>;
    /// Stamps the last-login column, returning the new timestamp.
    async fn touch_login(&self, id: ID<GameAccount>) -> Result<DateTime<Utc>, PgErr>;
}

impl AccountRepository for Arc<Client> {
    async fn exists(&self, username: &str, email: &str) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT 1 FROM ",
                ACCOUNTS,
                " WHERE username = $1 OR email = $2"
            ),
            &[&username, &email],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn create(&self, account: &GameAccount, hashword: &str) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                ACCOUNTS,
                " (id, username, email, hashword, display_name) VALUES ($1, $2, $3, $4, $5)"
            ),
            &[
                &account.id().inner(),
                &account.username(),
                &account.email(),
                &hashword,
                &account.display_name(),
            ],
        )
        .await
        .map(|_| ())
    }

    async fn lookup(&self, identifier: &str) -> Result<Option<(GameAccount, String)>, PgErr> {
        // username takes precedence; both columns are unique so the OR
        // can match at most two rows and username sorts the decision
        self.query_opt(
            const_format::concatcp!(
                "SELECT * FROM ",
                ACCOUNTS,
                " WHERE username = $1 OR email = $1 ORDER BY username = $1 DESC LIMIT 1"
            ),
            &[&identifier],
        )
        .await
        .map(|opt| opt.map(|row| (GameAccount::from(&row), row.get("hashword"))))
    }

    async fn fetch(&self, username: &str) -> Result<Option<GameAccount>, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT * FROM ", ACCOUNTS, " WHERE username = $1"),
            &[&username],
        )
        .await
        .map(|opt| opt.map(|row| GameAccount::from(&row)))
    }

    async fn touch_login(&self, id: ID<GameAccount>) -> Result<DateTime<Utc>, PgErr> {
        self.query_one(
            const_format::concatcp!(
                "UPDATE ",
                ACCOUNTS,
                " SET last_login_at = NOW() WHERE id = $1 RETURNING last_login_at"
            ),
            &[&id.inner()],
        )
        .await
        .map(|row| row.get(0))
    }
}
