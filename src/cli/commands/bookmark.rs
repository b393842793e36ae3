use crate::cli::parser::{BookmarkAction, Commands};
use crate::config::Config;
use crate::core::bookmark::BookmarkLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::location::Coordinate;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bookmark { action } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        match action {
            BookmarkAction::Add { name, lat, lon } => {
                let coordinate = Coordinate::validated(*lat, *lon)?;
                let b = BookmarkLogic::add(&mut pool, name, coordinate)?;
                success(format!("Bookmark '{}' saved at {}", b.name, b.coordinate));
            }
            BookmarkAction::List => {
                let bookmarks = BookmarkLogic::list(&mut pool)?;
                if bookmarks.is_empty() {
                    info("No bookmarks saved.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("NAME", 24),
                    Column::new("LOCATION", 24),
                    Column::new("CREATED", 25),
                ]);
                for b in bookmarks {
                    table.add_row(vec![b.name, b.coordinate.to_string(), b.created_at]);
                }
                print!("{}", table.render());
            }
            BookmarkAction::Del { name } => {
                BookmarkLogic::remove(&mut pool, name)?;
                success(format!("Bookmark '{}' removed.", name));
            }
        }
    }
    Ok(())
}
