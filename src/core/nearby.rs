use crate::config::Config;
use crate::db::store::SqliteTaskStore;
use crate::models::location::Coordinate;
use crate::tracking::notifier::Notifier;
use crate::tracking::proximity::{NearbyTask, ProximityChecker};
use crate::tracking::terminal::TerminalNotifications;
use std::rc::Rc;

pub struct NearbyLogic;

impl NearbyLogic {
    /// Open tasks within `radius_m` of `at`, closest first.
    /// With `notify`, each match is also announced through the notifier.
    pub async fn run(cfg: &Config, at: Coordinate, radius_m: f64, notify: bool) -> Vec<NearbyTask> {
        let store = Rc::new(SqliteTaskStore::new(cfg.database.clone()));
        let checker = ProximityChecker::new(store, radius_m);

        let mut nearby = checker.check_nearby(&at).await;
        nearby.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));

        if notify && !nearby.is_empty() {
            let platform = Rc::new(
                TerminalNotifications::new(cfg.notification_permission)
                    .with_log(cfg.database.clone()),
            );
            let notifier = Notifier::new(platform, cfg.notification_title.clone());
            notifier.ensure_permission().await;
            notifier.notify(&nearby).await;
        }

        nearby
    }
}
