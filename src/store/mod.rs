//! Unit-of-work storage: a `Store` hands out one `Session` (one transaction) per request.

pub mod memory;
pub mod postgres;
pub mod schema;

use crate::error::AppError;
use async_trait::async_trait;
use schema::Table;
use serde_json::Value;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, ensure_tables, PgStore};

/// One stored row keyed by column name.
pub type Row = serde_json::Map<String, Value>;

/// Changes made through a session become visible to others only after `commit`.
/// Dropping a session without committing discards them.
#[async_trait]
pub trait Session: Send {
    /// Every row of `table`, ordered by primary key.
    async fn fetch_all(&mut self, table: &'static Table) -> Result<Vec<Row>, AppError>;

    /// Rows whose `column` equals any of `values`, ordered by primary key.
    async fn fetch_where_in(
        &mut self,
        table: &'static Table,
        column: &str,
        values: &[Value],
    ) -> Result<Vec<Row>, AppError>;

    /// Insert one row and return it as stored (serial ids filled in).
    async fn insert(&mut self, table: &'static Table, row: &Row) -> Result<Row, AppError>;

    /// Overwrite the non-key columns present in `row` on the row with `id`. Returns rows affected.
    async fn update(&mut self, table: &'static Table, id: i32, row: &Row) -> Result<u64, AppError>;

    /// Delete rows whose `column` equals any of `values`. Returns rows affected.
    async fn delete_where_in(
        &mut self,
        table: &'static Table,
        column: &str,
        values: &[Value],
    ) -> Result<u64, AppError>;

    async fn commit(self: Box<Self>) -> Result<(), AppError>;
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn Session>, AppError>;

    /// Cheap liveness probe used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;

    fn backend(&self) -> &'static str;
}
