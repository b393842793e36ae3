use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{find_bookmark, get_task, insert_task};
use crate::errors::AppResult;
use crate::intelligence::TaskIntelligence;
use crate::models::category::Category;
use crate::models::location::Coordinate;
use crate::models::priority::Priority;
use crate::models::task::Task;

/// Where a new task is pinned.
#[derive(Debug, Clone)]
pub enum Placement {
    At(Coordinate),
    Bookmark(String),
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Create a task. Category and priority come from the explicit values
    /// when given, otherwise from `intelligence` (if any), otherwise defaults.
    pub fn apply(
        pool: &mut DbPool,
        text: &str,
        placement: Placement,
        category: Option<Category>,
        priority: Option<Priority>,
        intelligence: Option<&TaskIntelligence>,
    ) -> AppResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(crate::errors::AppError::Other(
                "Task text must not be empty".into(),
            ));
        }

        let coordinate = match placement {
            Placement::At(c) => c,
            Placement::Bookmark(name) => find_bookmark(&pool.conn, &name)?.coordinate,
        };

        let suggestion = intelligence.map(|ai| ai.suggest(text));

        let category = category
            .or(suggestion.as_ref().map(|s| s.category))
            .unwrap_or(Category::Personal);
        let priority = priority
            .or(suggestion.as_ref().map(|s| s.priority))
            .unwrap_or(Priority::Medium);

        let task = Task::new(text, coordinate)
            .with_category(category)
            .with_priority(priority);

        let id = insert_task(&pool.conn, &task)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("task #{}", id),
            &format!("{} @ {}", task.text, task.coordinate),
        );

        get_task(&pool.conn, id)
    }
}
