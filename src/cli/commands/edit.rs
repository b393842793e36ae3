use crate::cli::commands::{parse_category, parse_priority};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, TaskChanges};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::describe_priority;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        text,
        at,
        category,
        priority,
    } = cmd
    {
        let changes = TaskChanges {
            text: text.clone(),
            coordinate: at.coordinate()?,
            category: parse_category(category)?,
            priority: parse_priority(priority)?,
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let task = EditLogic::apply(&mut pool, *id, changes)?;

        success(format!("Task #{} updated: {}", task.id, task.text));
        println!(
            "   {} {} | {} | {}",
            task.category.icon(),
            task.category.to_db_str(),
            describe_priority(task.priority),
            task.coordinate
        );
    }
    Ok(())
}
