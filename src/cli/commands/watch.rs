use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::runtime::run_local;
use crate::core::watch::WatchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { source, realtime } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        let summary = run_local(WatchLogic::run(&pool, cfg, source.as_deref(), *realtime))?;

        if summary.interrupted {
            info("Interrupted.");
        }
        info(format!(
            "Tracking stopped: {} proximity check(s) run.",
            summary.checks_started
        ));
        if let Some(last) = summary.last_location {
            println!("   last position: {}", last.coordinate);
        }
    }
    Ok(())
}
