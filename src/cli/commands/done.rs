use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::complete::CompleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id, undo } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let task = CompleteLogic::apply(&mut pool, *id, !*undo)?;

        if task.completed {
            success(format!("Task #{} done: {}", task.id, task.text));
        } else {
            success(format!("Task #{} reopened: {}", task.id, task.text));
        }
    }
    Ok(())
}
