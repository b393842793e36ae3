use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_task, get_task};
use crate::errors::AppResult;
use crate::models::task::Task;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a task; returns the removed row.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Task> {
        let task = get_task(&pool.conn, id)?;
        delete_task(pool, id)?;

        ttlog_quiet(&pool.conn, "del", &format!("task #{}", id), &task.text);
        Ok(task)
    }
}
