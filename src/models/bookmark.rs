use super::location::Coordinate;
use chrono::Local;
use serde::Serialize;

/// A named place tasks can be pinned to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bookmark {
    pub id: i64,
    pub name: String,
    pub coordinate: Coordinate,
    pub created_at: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: 0,
            name: name.into(),
            coordinate,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
