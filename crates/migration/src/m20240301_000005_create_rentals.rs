//! Create `rentals` table referencing clients, bikes and shops.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rentals::Table)
                    .if_not_exists()
                    .col(pk_auto(Rentals::Id))
                    .col(integer(Rentals::ClientId).not_null())
                    .col(integer(Rentals::BikeId).not_null())
                    .col(integer(Rentals::ShopId).not_null())
                    .col(date(Rentals::StartDate).not_null())
                    .col(date(Rentals::EndDate).not_null())
                    .col(double_null(Rentals::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_client")
                            .from(Rentals::Table, Rentals::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_bike")
                            .from(Rentals::Table, Rentals::BikeId)
                            .to(Bikes::Table, Bikes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_shop")
                            .from(Rentals::Table, Rentals::ShopId)
                            .to(Shops::Table, Shops::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rentals::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rentals {
    Table,
    Id,
    ClientId,
    BikeId,
    ShopId,
    StartDate,
    EndDate,
    Price,
}

#[derive(DeriveIden)]
enum Clients { Table, Id }

#[derive(DeriveIden)]
enum Bikes { Table, Id }

#[derive(DeriveIden)]
enum Shops { Table, Id }
