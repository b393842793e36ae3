use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::bookmark::Bookmark;
use crate::models::category::Category;
use crate::models::location::Coordinate;
use crate::models::priority::Priority;
use crate::models::task::Task;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const TASK_COLUMNS: &str =
    "id, text, latitude, longitude, completed, created_at, category, priority";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_task(row: &Row) -> Result<Task> {
    let category_str: String = row.get("category")?;
    let category = Category::from_db_str(&category_str)
        .ok_or_else(|| conversion_error(AppError::InvalidCategory(category_str.clone())))?;

    let priority_str: String = row.get("priority")?;
    let priority = Priority::from_db_str(&priority_str)
        .ok_or_else(|| conversion_error(AppError::InvalidPriority(priority_str.clone())))?;

    Ok(Task {
        id: row.get("id")?,
        text: row.get("text")?,
        coordinate: Coordinate::new(row.get("latitude")?, row.get("longitude")?),
        completed: row.get::<_, i32>("completed")? == 1,
        created_at: row.get("created_at")?,
        category,
        priority,
    })
}

pub fn map_bookmark(row: &Row) -> Result<Bookmark> {
    Ok(Bookmark {
        id: row.get("id")?,
        name: row.get("name")?,
        coordinate: Coordinate::new(row.get("latitude")?, row.get("longitude")?),
        created_at: row.get("created_at")?,
    })
}

fn query_tasks(conn: &Connection, where_clause: &str) -> AppResult<Vec<Task>> {
    let sql = format!(
        "SELECT {} FROM tasks {} ORDER BY id ASC",
        TASK_COLUMNS, where_clause
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_task)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// `select tasks where completed = false`
pub fn load_open_tasks(conn: &Connection) -> AppResult<Vec<Task>> {
    query_tasks(conn, "WHERE completed = 0")
}

pub fn load_completed_tasks(conn: &Connection) -> AppResult<Vec<Task>> {
    query_tasks(conn, "WHERE completed = 1")
}

pub fn load_all_tasks(conn: &Connection) -> AppResult<Vec<Task>> {
    query_tasks(conn, "")
}

pub fn get_task(conn: &Connection, id: i64) -> AppResult<Task> {
    let sql = format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS);
    conn.query_row(&sql, [id], map_task)
        .optional()?
        .ok_or(AppError::TaskNotFound(id))
}

/// Insert a task and return its new id.
pub fn insert_task(conn: &Connection, task: &Task) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tasks (text, latitude, longitude, completed, created_at, category, priority)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            task.text,
            task.coordinate.latitude,
            task.coordinate.longitude,
            if task.completed { 1 } else { 0 },
            task.created_at,
            task.category.to_db_str(),
            task.priority.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a task (all fields except id and created_at)
pub fn update_task(conn: &Connection, task: &Task) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE tasks
         SET text = ?1, latitude = ?2, longitude = ?3,
             completed = ?4, category = ?5, priority = ?6
         WHERE id = ?7",
        params![
            task.text,
            task.coordinate.latitude,
            task.coordinate.longitude,
            if task.completed { 1 } else { 0 },
            task.category.to_db_str(),
            task.priority.to_db_str(),
            task.id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::TaskNotFound(task.id));
    }
    Ok(())
}

pub fn set_task_completed(conn: &Connection, id: i64, completed: bool) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE tasks SET completed = ?1 WHERE id = ?2",
        params![if completed { 1 } else { 0 }, id],
    )?;
    if changed == 0 {
        return Err(AppError::TaskNotFound(id));
    }
    Ok(())
}

pub fn delete_task(pool: &mut DbPool, id: i64) -> AppResult<()> {
    let changed = pool.conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::TaskNotFound(id));
    }
    Ok(())
}

/// `select all location_bookmarks`
pub fn load_bookmarks(conn: &Connection) -> AppResult<Vec<Bookmark>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, latitude, longitude, created_at
         FROM location_bookmarks ORDER BY name ASC",
    )?;
    let rows = stmt.query_map([], map_bookmark)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_bookmark(conn: &Connection, name: &str) -> AppResult<Bookmark> {
    conn.query_row(
        "SELECT id, name, latitude, longitude, created_at
         FROM location_bookmarks WHERE name = ?1 COLLATE NOCASE",
        [name],
        map_bookmark,
    )
    .optional()?
    .ok_or_else(|| AppError::BookmarkNotFound(name.to_string()))
}

pub fn insert_bookmark(conn: &Connection, bookmark: &Bookmark) -> AppResult<i64> {
    let exists = find_bookmark(conn, &bookmark.name).is_ok();
    if exists {
        return Err(AppError::DuplicateBookmark(bookmark.name.clone()));
    }

    conn.execute(
        "INSERT INTO location_bookmarks (name, latitude, longitude, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            bookmark.name,
            bookmark.coordinate.latitude,
            bookmark.coordinate.longitude,
            bookmark.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_bookmark(conn: &Connection, name: &str) -> AppResult<()> {
    let changed = conn.execute(
        "DELETE FROM location_bookmarks WHERE name = ?1 COLLATE NOCASE",
        [name],
    )?;
    if changed == 0 {
        return Err(AppError::BookmarkNotFound(name.to_string()));
    }
    Ok(())
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
