pub use sea_orm_migration::prelude::*;

mod m20251101_000001_cafe;
mod m20251101_000002_employee;
mod m20251101_000003_employee_cafe;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_cafe::Migration),
            Box::new(m20251101_000002_employee::Migration),
            Box::new(m20251101_000003_employee_cafe::Migration),
        ]
    }
}
