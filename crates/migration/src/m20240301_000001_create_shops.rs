//! Create `shops` table.
//!
//! Shops are referenced by bikes and rentals; `name` is a secondary lookup key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shops::Table)
                    .if_not_exists()
                    .col(pk_auto(Shops::Id))
                    .col(string_len(Shops::Name, 128).not_null())
                    .col(string_len(Shops::Address, 256).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shops::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shops { Table, Id, Name, Address }
