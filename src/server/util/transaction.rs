use std::{future::Future, pin::Pin};

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::error::Error;

/// Runs `operation` inside a database transaction.
///
/// The transaction is committed when the operation returns `Ok` and rolled back when it
/// returns `Err`, the error is then returned unchanged. Failing to begin or commit the
/// transaction yields [`Error::DbErr`].
///
/// The operation receives the transaction as its connection and must own everything it
/// captures:
///
/// ```ignore
/// let employee_id = employee_id.to_string();
///
/// in_transaction(&db, |txn| {
///     Box::pin(async move {
///         EmployeeCafeRepository::new(txn).delete_by_employee_id(&employee_id).await?;
///         EmployeeRepository::new(txn).delete(&employee_id).await?;
///
///         Ok(())
///     })
/// })
/// .await?;
/// ```
pub async fn in_transaction<T, F>(db: &DatabaseConnection, operation: F) -> Result<T, Error>
where
    T: Send,
    F: for<'c> FnOnce(
            &'c DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = Result<T, Error>> + Send + 'c>>
        + Send,
{
    Ok(db.transaction::<F, T, Error>(operation).await?)
}
