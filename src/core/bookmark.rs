use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_bookmark, find_bookmark, insert_bookmark, load_bookmarks};
use crate::errors::{AppError, AppResult};
use crate::models::bookmark::Bookmark;
use crate::models::location::Coordinate;

pub struct BookmarkLogic;

impl BookmarkLogic {
    pub fn add(pool: &mut DbPool, name: &str, coordinate: Coordinate) -> AppResult<Bookmark> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("Bookmark name must not be empty".into()));
        }

        insert_bookmark(&pool.conn, &Bookmark::new(name, coordinate))?;
        ttlog_quiet(
            &pool.conn,
            "bookmark",
            name,
            &format!("Saved place {}", coordinate),
        );
        find_bookmark(&pool.conn, name)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Bookmark>> {
        load_bookmarks(&pool.conn)
    }

    pub fn remove(pool: &mut DbPool, name: &str) -> AppResult<()> {
        delete_bookmark(&pool.conn, name)?;
        ttlog_quiet(&pool.conn, "bookmark", name, "Removed place");
        Ok(())
    }
}
