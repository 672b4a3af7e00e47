use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shops and clients are looked up by exact name
        manager
            .create_index(
                Index::create()
                    .name("idx_shop_name")
                    .table(Shops::Table)
                    .col(Shops::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_client_name")
                    .table(Clients::Table)
                    .col(Clients::Name)
                    .to_owned(),
            )
            .await?;

        // Bikes: index on shop_id
        manager
            .create_index(
                Index::create()
                    .name("idx_bike_shop")
                    .table(Bikes::Table)
                    .col(Bikes::ShopId)
                    .to_owned(),
            )
            .await?;

        // Rentals: index on each referenced entity
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_client")
                    .table(Rentals::Table)
                    .col(Rentals::ClientId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_bike")
                    .table(Rentals::Table)
                    .col(Rentals::BikeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_shop")
                    .table(Rentals::Table)
                    .col(Rentals::ShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_shop_name").table(Shops::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_client_name").table(Clients::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bike_shop").table(Bikes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rental_client").table(Rentals::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rental_bike").table(Rentals::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rental_shop").table(Rentals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Shops { Table, Name }

#[derive(DeriveIden)]
enum Clients { Table, Name }

#[derive(DeriveIden)]
enum Bikes { Table, ShopId }

#[derive(DeriveIden)]
enum Rentals { Table, ClientId, BikeId, ShopId }
