use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(string_len(Employees::Id, 9).primary_key())
                    .col(string_len(Employees::Name, 10))
                    .col(string_uniq(Employees::EmailAddress))
                    .col(string_len(Employees::PhoneNumber, 8))
                    .col(string_len(Employees::Gender, 6))
                    .col(timestamp(Employees::CreatedAt))
                    .col(timestamp(Employees::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    Name,
    EmailAddress,
    PhoneNumber,
    Gender,
    CreatedAt,
    UpdatedAt,
}
