//! Create `catalogs` table.
//!
//! `pdf_url` stores a filesystem path resolved at download time.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Catalogs::Table)
                    .if_not_exists()
                    .col(pk_auto(Catalogs::Id))
                    .col(string_len(Catalogs::Name, 128).not_null())
                    .col(string_len_null(Catalogs::Description, 512))
                    .col(string_len(Catalogs::PdfUrl, 512).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Catalogs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Catalogs { Table, Id, Name, Description, PdfUrl }
