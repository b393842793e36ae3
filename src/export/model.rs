use crate::models::task::Task;
use serde::Serialize;

/// Flat task row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TaskExport {
    pub id: i64,
    pub text: String,
    pub latitude: f64,
    pub longitude: f64,
    pub completed: bool,
    pub category: String,
    pub priority: String,
    pub created_at: String,
}

impl From<&Task> for TaskExport {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id,
            text: t.text.clone(),
            latitude: t.coordinate.latitude,
            longitude: t.coordinate.longitude,
            completed: t.completed,
            category: t.category.to_db_str().to_string(),
            priority: t.priority.to_db_str().to_string(),
            created_at: t.created_at.clone(),
        }
    }
}
