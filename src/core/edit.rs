use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{get_task, update_task};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::location::Coordinate;
use crate::models::priority::Priority;
use crate::models::task::Task;

#[derive(Debug, Default, Clone)]
pub struct TaskChanges {
    pub text: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.coordinate.is_none()
            && self.category.is_none()
            && self.priority.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply(pool: &mut DbPool, id: i64, changes: TaskChanges) -> AppResult<Task> {
        if changes.is_empty() {
            return Err(AppError::Other(
                "Nothing to change: pass --text, --lat/--lon, --category or --priority".into(),
            ));
        }

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let mut task = get_task(&tx, id)?;
            if let Some(text) = changes.text {
                let text = text.trim().to_string();
                if text.is_empty() {
                    return Err(AppError::Other("Task text must not be empty".into()));
                }
                task.text = text;
            }
            if let Some(c) = changes.coordinate {
                task.coordinate = c;
            }
            if let Some(c) = changes.category {
                task.category = c;
            }
            if let Some(p) = changes.priority {
                task.priority = p;
            }

            update_task(&tx, &task)?;
            tx.commit()?;

            ttlog_quiet(conn, "edit", &format!("task #{}", id), &task.text);
            Ok(task)
        })
    }
}
