use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::distance::format_distance;
use crate::core::locate::LocateLogic;
use crate::core::nearby::NearbyLogic;
use crate::core::runtime::run_local;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::Coordinate;
use crate::tracking::proximity::NearbyTask;
use crate::ui::messages::{header, info};
use crate::utils::describe_priority;
use crate::utils::table::{Column, Table};

async fn search(
    cfg: &Config,
    fixed: Option<Coordinate>,
    source: Option<&str>,
    radius: f64,
    notify: bool,
) -> AppResult<(Coordinate, Vec<NearbyTask>)> {
    let point = match fixed {
        Some(c) => c,
        None => LocateLogic::current(cfg, source).await?.coordinate,
    };
    let found = NearbyLogic::run(cfg, point, radius, notify).await;
    Ok((point, found))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Nearby {
        at,
        here,
        radius,
        notify,
        source,
    } = cmd
    {
        let radius = radius.unwrap_or(cfg.proximity_radius_m);
        if !radius.is_finite() || radius < 0.0 {
            return Err(AppError::Other(format!("Invalid radius: {}", radius)));
        }

        // migrations first, so the read-only store sees the full schema
        DbPool::open(&cfg.database)?;

        let fixed = at.coordinate()?;
        if fixed.is_none() && !*here {
            return Err(AppError::Other(
                "Missing location: pass --lat/--lon or --here".into(),
            ));
        }

        let (point, nearby) = run_local(search(cfg, fixed, source.as_deref(), radius, *notify))?;

        if nearby.is_empty() {
            info(format!(
                "No open tasks within {} of {}.",
                format_distance(radius),
                point
            ));
            return Ok(());
        }

        header(format!(
            "{} open task(s) within {} of {}",
            nearby.len(),
            format_distance(radius),
            point
        ));

        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("DISTANCE", 10),
            Column::new("PRIO", 6),
            Column::new("TASK", 48),
        ]);
        for n in &nearby {
            table.add_row(vec![
                n.task.id.to_string(),
                format_distance(n.distance_m),
                describe_priority(n.task.priority),
                n.task.text.clone(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
