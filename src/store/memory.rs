//! In-process store with the same key and foreign-key rules as the PostgreSQL schema.
//! A session holds the store lock and works on a staged copy that replaces the
//! committed tables on `commit`.

use super::schema::{OnDelete, Table, TABLES};
use super::{Row, Session, Store};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Debug, Default)]
struct Tables {
    rows: HashMap<&'static str, Vec<Row>>,
    sequences: HashMap<&'static str, i32>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn Session>, AppError> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemorySession { guard, staged }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

pub struct MemorySession {
    guard: OwnedMutexGuard<Tables>,
    staged: Tables,
}

fn key_of(table: &Table, row: &Row) -> Vec<Value> {
    table
        .primary_key
        .iter()
        .map(|k| row.get(*k).cloned().unwrap_or(Value::Null))
        .collect()
}

fn sort_rows(table: &Table, rows: &mut [Row]) {
    rows.sort_by_key(|r| {
        key_of(table, r)
            .iter()
            .map(|v| v.as_i64().unwrap_or_default())
            .collect::<Vec<_>>()
    });
}

impl MemorySession {
    fn rows(&self, table: &Table) -> &[Row] {
        self.staged.rows.get(table.name).map(Vec::as_slice).unwrap_or(&[])
    }

    fn has_id(&self, table_name: &str, id: &Value) -> bool {
        self.staged
            .rows
            .get(table_name)
            .map(|rows| rows.iter().any(|r| r.get("id") == Some(id)))
            .unwrap_or(false)
    }

    fn check_references(&self, table: &Table, row: &Row) -> Result<(), AppError> {
        for fk in table.foreign_keys {
            let Some(target) = row.get(fk.column).filter(|v| !v.is_null()) else {
                continue;
            };
            if !self.has_id(fk.references, target) {
                return Err(AppError::Persistence(format!(
                    "{}.{} references missing {} {}",
                    table.name, fk.column, fk.references, target
                )));
            }
        }
        Ok(())
    }

    fn check_not_null(table: &Table, row: &Row) -> Result<(), AppError> {
        for c in table.columns.iter().filter(|c| !c.nullable) {
            if row.get(c.name).map_or(true, Value::is_null) {
                return Err(AppError::Persistence(format!("{}.{} may not be null", table.name, c.name)));
            }
        }
        Ok(())
    }

    /// Applies ON DELETE rules of every table pointing at `table` for the removed `ids`.
    fn release_references(&mut self, table: &Table, ids: &[Value]) -> Result<(), AppError> {
        for dependent in TABLES {
            for fk in dependent.foreign_keys.iter().filter(|fk| fk.references == table.name) {
                let Some(rows) = self.staged.rows.get_mut(dependent.name) else {
                    continue;
                };
                let points_at_removed = |r: &Row| r.get(fk.column).map_or(false, |v| ids.contains(v));
                match fk.on_delete {
                    OnDelete::Cascade => rows.retain(|r| !points_at_removed(r)),
                    OnDelete::Restrict => {
                        if rows.iter().any(points_at_removed) {
                            return Err(AppError::Persistence(format!(
                                "{} still referenced by {}",
                                table.name, dependent.name
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Session for MemorySession {
    async fn fetch_all(&mut self, table: &'static Table) -> Result<Vec<Row>, AppError> {
        let mut rows = self.rows(table).to_vec();
        sort_rows(table, &mut rows);
        Ok(rows)
    }

    async fn fetch_where_in(
        &mut self,
        table: &'static Table,
        column: &str,
        values: &[Value],
    ) -> Result<Vec<Row>, AppError> {
        let mut rows: Vec<Row> = self
            .rows(table)
            .iter()
            .filter(|r| r.get(column).map_or(false, |v| values.contains(v)))
            .cloned()
            .collect();
        sort_rows(table, &mut rows);
        Ok(rows)
    }

    async fn insert(&mut self, table: &'static Table, row: &Row) -> Result<Row, AppError> {
        let mut stored = Row::new();
        for c in table.columns {
            let value = if c.serial {
                let next = self.staged.sequences.entry(table.name).or_insert(0);
                *next += 1;
                Value::from(*next)
            } else {
                row.get(c.name).cloned().unwrap_or(Value::Null)
            };
            stored.insert(c.name.to_string(), value);
        }
        Self::check_not_null(table, &stored)?;
        self.check_references(table, &stored)?;
        let key = key_of(table, &stored);
        if self.rows(table).iter().any(|r| key_of(table, r) == key) {
            return Err(AppError::Persistence(format!("duplicate key in {}", table.name)));
        }
        self.staged.rows.entry(table.name).or_default().push(stored.clone());
        Ok(stored)
    }

    async fn update(&mut self, table: &'static Table, id: i32, row: &Row) -> Result<u64, AppError> {
        let id = Value::from(id);
        let Some(current) = self.rows(table).iter().find(|r| r.get("id") == Some(&id)) else {
            return Ok(0);
        };
        let mut updated = current.clone();
        let mut changed = false;
        for c in table.columns.iter().filter(|c| !table.is_key(c.name)) {
            if let Some(v) = row.get(c.name) {
                updated.insert(c.name.to_string(), v.clone());
                changed = true;
            }
        }
        if !changed {
            return Ok(0);
        }
        Self::check_not_null(table, &updated)?;
        self.check_references(table, &updated)?;
        if let Some(slot) = self
            .staged
            .rows
            .get_mut(table.name)
            .and_then(|rows| rows.iter_mut().find(|r| r.get("id") == Some(&id)))
        {
            *slot = updated;
        }
        Ok(1)
    }

    async fn delete_where_in(
        &mut self,
        table: &'static Table,
        column: &str,
        values: &[Value],
    ) -> Result<u64, AppError> {
        let matches = |r: &Row| r.get(column).map_or(false, |v| values.contains(v));
        let removed_ids: Vec<Value> = self
            .rows(table)
            .iter()
            .filter(|&r| matches(r))
            .filter_map(|r| r.get("id").cloned())
            .collect();
        if !removed_ids.is_empty() {
            self.release_references(table, &removed_ids)?;
        }
        let Some(rows) = self.staged.rows.get_mut(table.name) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|r| !matches(r));
        Ok((before - rows.len()) as u64)
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        let MemorySession { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}
