//! SQLite-backed task store, as seen by the proximity checker.

use crate::db::queries::load_open_tasks;
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use crate::tracking::proximity::TaskSource;
use async_trait::async_trait;
use rusqlite::{Connection, OpenFlags};

/// Opens the database read-only for each fetch, so a store that is briefly
/// unreachable recovers on the next check.
pub struct SqliteTaskStore {
    db_path: String,
}

impl SqliteTaskStore {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

#[async_trait(?Send)]
impl TaskSource for SqliteTaskStore {
    async fn fetch_open_tasks(&self) -> AppResult<Vec<Task>> {
        let unavailable = |e: AppError| AppError::StoreUnavailable(format!("{}: {}", self.db_path, e));

        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| unavailable(e.into()))?;
        load_open_tasks(&conn).map_err(unavailable)
    }
}
