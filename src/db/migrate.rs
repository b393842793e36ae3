use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column called `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `tasks` table (base schema, before the intelligence columns).
fn create_tasks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            text        TEXT NOT NULL,
            latitude    REAL NOT NULL CHECK(latitude BETWEEN -90 AND 90),
            longitude   REAL NOT NULL CHECK(longitude BETWEEN -180 AND 180),
            completed   INTEGER NOT NULL DEFAULT 0 CHECK(completed IN (0, 1)),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);
        "#,
    )?;
    Ok(())
}

fn create_bookmarks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS location_bookmarks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            latitude    REAL NOT NULL,
            longitude   REAL NOT NULL,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Add `category` and `priority` to tasks.
fn migrate_add_task_intelligence(conn: &Connection) -> Result<(), Error> {
    let version = "20260301_0001_task_intelligence";

    // 1) Already applied?
    if migration_applied(conn, version)? {
        return Ok(());
    }

    // 2) Run it (columns may exist if a previous run died before step 3)
    let tx = conn.unchecked_transaction()?;

    if !has_column(&tx, "tasks", "category")? {
        tx.execute(
            "ALTER TABLE tasks ADD COLUMN category TEXT NOT NULL DEFAULT 'personal';",
            [],
        )
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'category' column: {}", e)),
            )
        })?;
    }

    if !has_column(&tx, "tasks", "priority")? {
        tx.execute(
            "ALTER TABLE tasks ADD COLUMN priority TEXT NOT NULL DEFAULT 'medium';",
            [],
        )
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'priority' column: {}", e)),
            )
        })?;
    }

    // 3) Mark as applied
    mark_applied(&tx, version, "Added category and priority to tasks")?;
    tx.commit()?;

    success(format!(
        "Migration applied: {} → added 'category' and 'priority' to tasks table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base tables
    if !table_exists(conn, "tasks")? {
        create_tasks_table(conn)?;
        success("Created tasks table.");
    }

    if !table_exists(conn, "location_bookmarks")? {
        create_bookmarks_table(conn)?;
        success("Created location_bookmarks table.");
    }

    // 3) Versioned migrations
    migrate_add_task_intelligence(conn)?;

    Ok(())
}
