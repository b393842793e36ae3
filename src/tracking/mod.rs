//! Location tracking pipeline: position source → significance filter →
//! proximity check → notification.

pub mod error;
pub mod history;
pub mod notifier;
pub mod platform;
pub mod proximity;
pub mod replay;
pub mod terminal;
pub mod watcher;

pub use error::LocationError;
pub use history::LocationHistory;
pub use notifier::Notifier;
pub use platform::{
    LocationPlatform, NotificationPlatform, PermissionState, PositionOptions, PositionSubscription,
    get_current_location,
};
pub use proximity::{NearbyTask, ProximityChecker, TaskSource};
pub use replay::{ReplayPlatform, ReplaySource};
pub use terminal::TerminalNotifications;
pub use watcher::{LocationWatcher, WatcherSettings, WatcherState};
