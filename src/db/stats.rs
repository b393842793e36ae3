use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TASK COUNTS
    //
    let total = count(pool, "SELECT COUNT(*) FROM tasks")?;
    let open = count(pool, "SELECT COUNT(*) FROM tasks WHERE completed = 0")?;
    let bookmarks = count(pool, "SELECT COUNT(*) FROM location_bookmarks")?;
    let log_rows = count(pool, "SELECT COUNT(*) FROM log")?;

    println!(
        "{}• Tasks:{} {}{}{} ({} open, {} done)",
        CYAN,
        RESET,
        GREEN,
        total,
        RESET,
        open,
        total - open
    );
    println!("{}• Bookmarks:{} {}", CYAN, RESET, bookmarks);
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    //
    // 3) CREATION RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM tasks ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM tasks ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt = |v: Option<String>| v.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Created:{}", CYAN, RESET);
    println!("    first: {}", fmt(first));
    println!("    last:  {}", fmt(last));

    println!();
    Ok(())
}
