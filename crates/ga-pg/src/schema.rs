use super::PgErr;
use tokio_postgres::Client;

/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL generation for table creation and indexing.
/// All methods return `&'static str` so DDL can be assembled at compile
/// time via `const_format::concatcp!`.
///
/// This trait contains no I/O operations; it purely describes table
/// structure. Statement execution lives in [`migrate`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Applies DDL for a table: creation first, then indices.
///
/// Both statements are idempotent, so calling this on every startup is
/// safe and keeps fresh deployments from needing a separate migration
/// step.
pub async fn migrate<S>(client: &Client) -> Result<(), PgErr>
where
    S: Schema,
{
    log::info!("ensuring schema for table {}", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await?;
    Ok(())
}
