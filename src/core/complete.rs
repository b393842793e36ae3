use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{get_task, set_task_completed};
use crate::errors::AppResult;
use crate::models::task::Task;

pub struct CompleteLogic;

impl CompleteLogic {
    /// Mark a task done (`completed = true`) or reopen it.
    pub fn apply(pool: &mut DbPool, id: i64, completed: bool) -> AppResult<Task> {
        set_task_completed(&pool.conn, id, completed)?;

        let op = if completed { "done" } else { "reopen" };
        let task = get_task(&pool.conn, id)?;
        ttlog_quiet(&pool.conn, op, &format!("task #{}", id), &task.text);
        Ok(task)
    }
}
