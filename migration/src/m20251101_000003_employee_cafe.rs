use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_cafe::Cafes, m20251101_000002_employee::Employees};

static IDX_EMPLOYEE_CAFE_CAFE_ID: &str = "idx-employee_cafe-cafe_id";
static FK_EMPLOYEE_CAFE_EMPLOYEE_ID: &str = "fk-employee_cafe-employee_id";
static FK_EMPLOYEE_CAFE_CAFE_ID: &str = "fk-employee_cafe-cafe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmployeeCafe::Table)
                    .if_not_exists()
                    .col(pk_auto(EmployeeCafe::Id))
                    .col(string_uniq(EmployeeCafe::EmployeeId))
                    .col(string(EmployeeCafe::CafeId))
                    .col(date(EmployeeCafe::StartDate))
                    .col(timestamp(EmployeeCafe::CreatedAt))
                    .col(timestamp(EmployeeCafe::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEE_CAFE_CAFE_ID)
                    .table(EmployeeCafe::Table)
                    .col(EmployeeCafe::CafeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMPLOYEE_CAFE_EMPLOYEE_ID)
                    .from_tbl(EmployeeCafe::Table)
                    .from_col(EmployeeCafe::EmployeeId)
                    .to_tbl(Employees::Table)
                    .to_col(Employees::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMPLOYEE_CAFE_CAFE_ID)
                    .from_tbl(EmployeeCafe::Table)
                    .from_col(EmployeeCafe::CafeId)
                    .to_tbl(Cafes::Table)
                    .to_col(Cafes::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMPLOYEE_CAFE_CAFE_ID)
                    .table(EmployeeCafe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EMPLOYEE_CAFE_EMPLOYEE_ID)
                    .table(EmployeeCafe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_CAFE_CAFE_ID)
                    .table(EmployeeCafe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EmployeeCafe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EmployeeCafe {
    Table,
    Id,
    EmployeeId,
    CafeId,
    StartDate,
    CreatedAt,
    UpdatedAt,
}
