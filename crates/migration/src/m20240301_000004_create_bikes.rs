//! Create `bikes` table.
//!
//! Every bike belongs to exactly one shop. Deleting a shop with bikes is
//! rejected at the store level; no cascade is defined.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bikes::Table)
                    .if_not_exists()
                    .col(pk_auto(Bikes::Id))
                    .col(string_len(Bikes::Name, 128).not_null())
                    .col(string_len(Bikes::Brand, 128).not_null())
                    .col(integer(Bikes::ShopId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bike_shop")
                            .from(Bikes::Table, Bikes::ShopId)
                            .to(Shops::Table, Shops::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bikes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bikes { Table, Id, Name, Brand, ShopId }

#[derive(DeriveIden)]
enum Shops { Table, Id }
