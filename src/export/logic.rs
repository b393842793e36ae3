use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_tasks, load_open_tasks};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TaskExport;
use crate::ui::messages::warning;
use crate::utils::path::absolutize;

pub struct ExportLogic;

impl ExportLogic {
    /// Write open tasks (or every task with `all`) to `file`.
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        all: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolutize(file)?;

        let tasks = if all {
            load_all_tasks(&pool.conn)?
        } else {
            load_open_tasks(&pool.conn)?
        };

        if tasks.is_empty() {
            warning("No tasks to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<TaskExport> = tasks.iter().map(TaskExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} tasks as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
