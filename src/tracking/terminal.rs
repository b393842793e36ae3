//! Notification platform that prints to the terminal and records each
//! notification in the internal log table.

use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::tracking::platform::{NotificationPlatform, PermissionState};
use crate::ui::messages::{ask_confirmation, warning};
use crate::utils::colors::{BOLD, MAGENTA, RESET};
use async_trait::async_trait;
use rusqlite::Connection;
use std::cell::Cell;
use std::io::IsTerminal;

pub struct TerminalNotifications {
    permission: Cell<PermissionState>,
    db_path: Option<String>,
}

impl TerminalNotifications {
    pub fn new(permission: PermissionState) -> Self {
        Self {
            permission: Cell::new(permission),
            db_path: None,
        }
    }

    /// Also write a `notify` row into the log table of this database.
    pub fn with_log(mut self, db_path: impl Into<String>) -> Self {
        self.db_path = Some(db_path.into());
        self
    }
}

#[async_trait(?Send)]
impl NotificationPlatform for TerminalNotifications {
    fn is_supported(&self) -> bool {
        true
    }

    async fn permission(&self) -> PermissionState {
        self.permission.get()
    }

    async fn request_permission(&self) -> PermissionState {
        if self.permission.get() == PermissionState::Prompt {
            let granted = std::io::stdin().is_terminal()
                && ask_confirmation("Allow geotask to show nearby-task notifications?");
            self.permission.set(if granted {
                PermissionState::Granted
            } else {
                PermissionState::Denied
            });
        }
        self.permission.get()
    }

    fn show(&self, title: &str, body: &str) -> AppResult<()> {
        println!("{}{}🔔 {}:{} {}", MAGENTA, BOLD, title, RESET, body);

        if let Some(path) = &self.db_path {
            let logged = Connection::open(path)
                .map_err(Into::into)
                .and_then(|conn| ttlog(&conn, "notify", title, body));
            if let Err(e) = logged {
                warning(format!("Failed to write internal log: {}", e));
            }
        }
        Ok(())
    }
}
