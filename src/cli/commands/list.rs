use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::distance::{distance, format_distance};
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_tasks, load_completed_tasks, load_open_tasks};
use crate::errors::AppResult;
use crate::models::location::Coordinate;
use crate::models::task::Task;
use crate::ui::messages::info;
use crate::utils::colors::colorize_status;
use crate::utils::describe_priority;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        all,
        completed,
        near,
    } = cmd
    {
        let origin = near.as_deref().map(Coordinate::parse).transpose()?;

        let pool = DbPool::open(&cfg.database)?;
        let tasks = if *all {
            load_all_tasks(&pool.conn)?
        } else if *completed {
            load_completed_tasks(&pool.conn)?
        } else {
            load_open_tasks(&pool.conn)?
        };

        if tasks.is_empty() {
            info("No tasks found.");
            return Ok(());
        }

        let mut rows: Vec<(Task, Option<f64>)> = tasks
            .into_iter()
            .map(|t| {
                let d = origin.map(|o| distance(&o, &t.coordinate));
                (t, d)
            })
            .collect();

        if origin.is_some() {
            rows.sort_by(|a, b| {
                a.1.unwrap_or(f64::MAX)
                    .total_cmp(&b.1.unwrap_or(f64::MAX))
            });
        }

        print_tasks(&rows);
    }
    Ok(())
}

fn print_tasks(rows: &[(Task, Option<f64>)]) {
    let with_distance = rows.iter().any(|(_, d)| d.is_some());

    let mut columns = vec![
        Column::new("ID", 6),
        Column::new("STATUS", 6),
        Column::new("PRIO", 6),
        Column::new("CATEGORY", 12),
        Column::new("TASK", 40),
        Column::new("LOCATION", 24),
    ];
    if with_distance {
        columns.push(Column::new("DISTANCE", 10));
    }
    columns.push(Column::new("CREATED", 16));

    let mut table = Table::new(columns);
    for (task, d) in rows {
        let mut row = vec![
            task.id.to_string(),
            colorize_status(task.completed),
            describe_priority(task.priority),
            format!("{} {}", task.category.icon(), task.category.to_db_str()),
            task.text.clone(),
            task.coordinate.to_string(),
        ];
        if with_distance {
            row.push(d.map(format_distance).unwrap_or_default());
        }
        row.push(task.created_short());
        table.add_row(row);
    }

    print!("{}", table.render());
}
