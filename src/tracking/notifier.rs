//! Turns nearby tasks into user-facing notifications.

use crate::tracking::platform::{NotificationPlatform, PermissionState};
use crate::tracking::proximity::NearbyTask;
use crate::ui::messages::warning;
use std::rc::Rc;

pub const DEFAULT_NOTIFICATION_TITLE: &str = "Task nearby";

pub struct Notifier {
    platform: Rc<dyn NotificationPlatform>,
    title: String,
}

impl Notifier {
    pub fn new(platform: Rc<dyn NotificationPlatform>, title: impl Into<String>) -> Self {
        Self {
            platform,
            title: title.into(),
        }
    }

    /// Current permission, asking the platform first when it is still `prompt`.
    pub async fn ensure_permission(&self) -> PermissionState {
        if !self.platform.is_supported() {
            return PermissionState::Denied;
        }
        match self.platform.permission().await {
            PermissionState::Prompt => self.platform.request_permission().await,
            state => state,
        }
    }

    /// Emit one notification per task; returns how many were shown.
    ///
    /// Nothing is emitted when notifications are unsupported or not granted.
    /// Repeated calls with the same task notify again.
    pub async fn notify(&self, tasks: &[NearbyTask]) -> usize {
        if tasks.is_empty() || !self.platform.is_supported() {
            return 0;
        }
        if self.platform.permission().await != PermissionState::Granted {
            return 0;
        }

        let mut shown = 0;
        for nearby in tasks {
            match self.platform.show(&self.title, &nearby.task.text) {
                Ok(()) => shown += 1,
                Err(e) => warning(format!(
                    "Failed to show notification for task #{}: {}",
                    nearby.task.id, e
                )),
            }
        }
        shown
    }
}
