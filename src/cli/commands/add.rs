use crate::cli::commands::{parse_category, parse_priority};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, Placement};
use crate::core::locate::LocateLogic;
use crate::core::runtime::run_local;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::intelligence::TaskIntelligence;
use crate::ui::messages::{info, success};
use crate::utils::describe_priority;

/// Add a task pinned to explicit coordinates, a bookmark or the current position.
pub fn handle(cmd: &Commands, cfg: &Config, intelligence: &TaskIntelligence) -> AppResult<()> {
    if let Commands::Add {
        text,
        at,
        bookmark,
        here,
        category,
        priority,
        no_suggest,
        source,
    } = cmd
    {
        let category = parse_category(category)?;
        let priority = parse_priority(priority)?;

        let placement = if let Some(name) = bookmark {
            Placement::Bookmark(name.clone())
        } else if let Some(c) = at.coordinate()? {
            Placement::At(c)
        } else if *here {
            let sample = run_local(LocateLogic::current(cfg, source.as_deref()))?;
            Placement::At(sample.coordinate)
        } else {
            return Err(AppError::Other(
                "Missing location: pass --lat/--lon, --at <bookmark> or --here".into(),
            ));
        };

        let suggestions = (!*no_suggest).then_some(intelligence);

        let mut pool = DbPool::open(&cfg.database)?;
        let task = AddLogic::apply(&mut pool, text, placement, category, priority, suggestions)?;

        success(format!("Task #{} added: {}", task.id, task.text));
        println!(
            "   {} {} | {} | {}",
            task.category.icon(),
            task.category.to_db_str(),
            describe_priority(task.priority),
            task.coordinate
        );

        if let Some(hint) = suggestions.and_then(|ai| ai.place_hint(&task.text)) {
            info(format!("Place mentioned: {}", hint));
        }
    }

    Ok(())
}
