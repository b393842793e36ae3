use super::{category::Category, location::Coordinate, priority::Priority};
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub text: String,            // ⇔ tasks.text
    pub coordinate: Coordinate,  // ⇔ tasks.latitude / tasks.longitude
    pub completed: bool,         // ⇔ tasks.completed (INT 0/1)
    pub created_at: String,      // ⇔ tasks.created_at (TEXT, ISO8601)
    pub category: Category,      // ⇔ tasks.category (TEXT, default 'personal')
    pub priority: Priority,      // ⇔ tasks.priority (TEXT, default 'medium')
}

impl Task {
    /// Build a not-yet-persisted open task.
    /// - `id = 0` (assigned by SQLite on insert)
    /// - `created_at = now()` in ISO8601
    pub fn new(text: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: 0,
            text: text.into(),
            coordinate,
            completed: false,
            created_at: Local::now().to_rfc3339(),
            category: Category::Personal,
            priority: Priority::Medium,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Creation date shortened to `YYYY-MM-DD HH:MM` for tables.
    pub fn created_short(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}
