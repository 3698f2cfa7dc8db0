//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use chrono::NaiveDate;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_roster_tables: bool,

    // Database fixtures to insert
    cafes: Vec<(String, String, String)>, // (cafe_id, name, location)
    employees: Vec<String>,               // employee_ids
    assignments: Vec<(String, String, NaiveDate)>, // (employee_id, cafe_id, start_date)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_roster_tables: false,
            cafes: Vec::new(),
            employees: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Add the café, employee, and assignment tables to the test database.
    pub fn with_roster_tables(mut self) -> Self {
        self.include_roster_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cafe_roster_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), cafe_roster_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Cafe)
    ///     .with_table(Employee)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock café with a known ID into the database.
    pub fn with_mock_cafe(
        mut self,
        cafe_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.cafes
            .push((cafe_id.into(), name.into(), location.into()));
        self
    }

    /// Insert mock employee into the database.
    ///
    /// The email address is derived from the ID so every mock employee is unique.
    pub fn with_mock_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.employees.push(employee_id.into());
        self
    }

    /// Assign a mock employee to a mock café starting on `start_date`.
    ///
    /// Both must be added via `with_mock_employee` and `with_mock_cafe`.
    pub fn with_assignment(
        mut self,
        employee_id: impl Into<String>,
        cafe_id: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        self.assignments
            .push((employee_id.into(), cafe_id.into(), start_date));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (roster tables if specified, then custom tables)
    /// 2. Inserts cafés, then employees, then assignments
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_roster_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Cafe),
                schema.create_table_from_entity(entity::prelude::Employee),
                schema.create_table_from_entity(entity::prelude::EmployeeCafe),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (cafe_id, name, location) in self.cafes {
            setup
                .cafe()
                .insert_cafe_with_id(&cafe_id, &name, &location)
                .await?;
        }

        for employee_id in self.employees {
            setup.employee().insert_mock_employee(&employee_id).await?;
        }

        for (employee_id, cafe_id, start_date) in self.assignments {
            setup
                .employee()
                .insert_assignment(&employee_id, &cafe_id, start_date)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
