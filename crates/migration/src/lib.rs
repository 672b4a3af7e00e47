//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_shops;
mod m20240301_000002_create_clients;
mod m20240301_000003_create_catalogs;
mod m20240301_000004_create_bikes;
mod m20240301_000005_create_rentals;
mod m20240301_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_shops::Migration),
            Box::new(m20240301_000002_create_clients::Migration),
            Box::new(m20240301_000003_create_catalogs::Migration),
            Box::new(m20240301_000004_create_bikes::Migration),
            Box::new(m20240301_000005_create_rentals::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000006_add_indexes::Migration),
        ]
    }
}
