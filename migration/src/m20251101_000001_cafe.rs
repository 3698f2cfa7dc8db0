use sea_orm_migration::{prelude::*, schema::*};

static IDX_CAFE_LOCATION: &str = "idx-cafes-location";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cafes::Table)
                    .if_not_exists()
                    .col(string(Cafes::Id).primary_key())
                    .col(string_len(Cafes::Name, 10))
                    .col(string_len(Cafes::Description, 256))
                    .col(string_null(Cafes::Logo))
                    .col(string(Cafes::Location))
                    .col(timestamp(Cafes::CreatedAt))
                    .col(timestamp(Cafes::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAFE_LOCATION)
                    .table(Cafes::Table)
                    .col(Cafes::Location)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAFE_LOCATION)
                    .table(Cafes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Cafes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Cafes {
    Table,
    Id,
    Name,
    Description,
    Logo,
    Location,
    CreatedAt,
    UpdatedAt,
}
