use crate::config::Config;
use crate::core::calculator::distance::format_distance;
use crate::core::locate::location_platform;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::SqliteTaskStore;
use crate::errors::AppResult;
use crate::models::location::LocationSample;
use crate::tracking::notifier::Notifier;
use crate::tracking::platform::PermissionState;
use crate::tracking::proximity::ProximityChecker;
use crate::tracking::terminal::TerminalNotifications;
use crate::tracking::watcher::LocationWatcher;
use crate::ui::messages::{info, warning};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default)]
pub struct WatchSummary {
    pub checks_started: u64,
    pub last_location: Option<LocationSample>,
    pub interrupted: bool,
}

pub struct WatchLogic;

impl WatchLogic {
    /// Track the position until the source runs dry or Ctrl-C is pressed.
    /// Must run inside a `LocalSet`.
    pub async fn run(
        pool: &DbPool,
        cfg: &Config,
        source: Option<&str>,
        realtime: bool,
    ) -> AppResult<WatchSummary> {
        let platform = location_platform(cfg, source).realtime(realtime);
        let described = platform
            .source()
            .map(|s| s.describe())
            .unwrap_or_else(|| "none".to_string());

        let store = Rc::new(SqliteTaskStore::new(cfg.database.clone()));
        let checker = ProximityChecker::new(store, cfg.proximity_radius_m);
        let radius = checker.radius_m();

        let notifications = Rc::new(
            TerminalNotifications::new(cfg.notification_permission)
                .with_log(cfg.database.clone()),
        );
        let notifier = Notifier::new(notifications, cfg.notification_title.clone());
        let permission = notifier.ensure_permission().await;
        if permission != PermissionState::Granted {
            warning(format!(
                "Notification permission is '{}': nearby tasks will not be announced.",
                permission.as_str()
            ));
        }

        let mut watcher = LocationWatcher::new(
            Rc::new(platform),
            checker,
            notifier,
            cfg.watcher_settings(),
        );
        watcher.start().await?;

        ttlog_quiet(&pool.conn, "watch", &described, "Tracking started");
        info(format!(
            "Watching {} (radius {}). Press Ctrl-C to stop.",
            described,
            format_distance(radius)
        ));

        let interrupted = tokio::select! {
            _ = watcher.finished() => false,
            _ = tokio::signal::ctrl_c() => true,
        };

        let summary = WatchSummary {
            checks_started: watcher.checks_started(),
            last_location: watcher.last_location(),
            interrupted,
        };
        watcher.stop();

        ttlog_quiet(
            &pool.conn,
            "watch",
            &described,
            &format!(
                "Tracking stopped after {} proximity checks",
                summary.checks_started
            ),
        );

        Ok(summary)
    }
}
