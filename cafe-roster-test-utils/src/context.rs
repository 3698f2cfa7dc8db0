//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database and a temporary directory standing in for the logo upload
//! directory, removed when the context is dropped.

use std::path::{Path, PathBuf};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::{
    error::TestError,
    fixtures::{cafe::CafeFixtures, employee::EmployeeFixtures},
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_roster_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// let cafe = test.cafe().insert_mock_cafe("JavaBeans", "Central").await?;
/// let employee = test.employee().insert_mock_employee("UIAAAAAA1").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Temporary directory used as the logo upload directory
    pub upload_dir: TempDir,
}

impl TestContext {
    /// Convert the database and upload directory into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // In integration tests
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.upload_dir.path().to_path_buf()))
    }

    /// Path of the temporary upload directory
    pub fn upload_path(&self) -> &Path {
        self.upload_dir.path()
    }

    /// Access café fixture helpers
    pub fn cafe(&mut self) -> CafeFixtures<'_> {
        CafeFixtures::new(&self.db)
    }

    /// Access employee and assignment fixture helpers
    pub fn employee(&mut self) -> EmployeeFixtures<'_> {
        EmployeeFixtures::new(&self.db)
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::IoError)` - Temporary directory could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let upload_dir = TempDir::new()?;

        Ok(TestContext { db, upload_dir })
    }

    /// Create database tables from schema statements.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
