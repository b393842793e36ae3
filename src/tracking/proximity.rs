//! Finds open tasks within the proximity radius of a location.

use crate::core::calculator::distance::distance;
use crate::errors::AppResult;
use crate::models::location::Coordinate;
use crate::models::task::Task;
use crate::ui::messages::warning;
use async_trait::async_trait;
use std::rc::Rc;

pub const DEFAULT_PROXIMITY_RADIUS_M: f64 = 500.0;

/// Read side of the task store, as seen by the proximity checker.
#[async_trait(?Send)]
pub trait TaskSource {
    /// All tasks with `completed = false`.
    async fn fetch_open_tasks(&self) -> AppResult<Vec<Task>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyTask {
    pub task: Task,
    pub distance_m: f64,
}

pub struct ProximityChecker {
    store: Rc<dyn TaskSource>,
    radius_m: f64,
}

impl ProximityChecker {
    pub fn new(store: Rc<dyn TaskSource>, radius_m: f64) -> Self {
        Self { store, radius_m }
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Open tasks within `radius_m` of `location`. Order is not significant.
    ///
    /// Never fails: a store error is reported and yields no matches.
    pub async fn check_nearby(&self, location: &Coordinate) -> Vec<NearbyTask> {
        match self.store.fetch_open_tasks().await {
            Ok(tasks) => filter_nearby(tasks, location, self.radius_m),
            Err(e) => {
                warning(format!("Proximity check skipped: {}", e));
                Vec::new()
            }
        }
    }
}

/// Keep the incomplete tasks whose distance to `location` is ≤ `radius_m`.
pub fn filter_nearby(tasks: Vec<Task>, location: &Coordinate, radius_m: f64) -> Vec<NearbyTask> {
    tasks
        .into_iter()
        .filter(|t| !t.completed)
        .filter_map(|task| {
            let d = distance(location, &task.coordinate);
            (d <= radius_m).then_some(NearbyTask {
                task,
                distance_m: d,
            })
        })
        .collect()
}
