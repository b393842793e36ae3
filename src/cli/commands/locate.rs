use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::locate::LocateLogic;
use crate::core::runtime::run_local;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_millis;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locate { source } = cmd {
        let sample = run_local(LocateLogic::current(cfg, source.as_deref()))?;

        success(format!("Current position: {}", sample.coordinate));
        if let Some(acc) = sample.accuracy {
            println!("   accuracy: ±{:.0} m", acc);
        }
        println!("   time:     {}", format_millis(sample.timestamp));
    }
    Ok(())
}
