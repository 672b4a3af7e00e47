use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Connect and bring the schema up to date. Tests that call this are
/// skipped entirely when `SKIP_DB_TESTS` is set.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
