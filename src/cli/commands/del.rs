use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::get_task;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        let task = get_task(&pool.conn, *id)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete task #{} \"{}\"? This action is irreversible.",
                task.id, task.text
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut pool, *id)?;
        success(format!("Task #{} has been deleted.", id));
    }

    Ok(())
}
