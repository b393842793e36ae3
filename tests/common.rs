#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use geotask::errors::{AppError, AppResult};
use geotask::models::location::{Coordinate, LocationSample};
use geotask::models::task::Task;
use geotask::tracking::platform::{
    LocationPlatform, NotificationPlatform, PermissionState, PositionOptions, PositionResult,
    PositionSubscription,
};
use geotask::tracking::proximity::TaskSource;
use geotask::tracking::LocationError;
use std::cell::{Cell, RefCell};
use std::env;
use std::fs;
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedSender;

/// `geotask` binary with HOME pointed at an empty directory, so a real
/// user config never leaks into a test.
pub fn gt() -> Command {
    let mut cmd = cargo_bin_cmd!("geotask");
    cmd.env("HOME", isolated_home());
    cmd
}

pub fn isolated_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("geotask_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geotask.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a replay file with the given lines and return its path.
pub fn replay_file(name: &str, lines: &[&str]) -> String {
    let p = temp_out(name, "replay");
    fs::write(&p, lines.join("\n")).expect("write replay file");
    p
}

pub fn init_db(db_path: &str) {
    gt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small set of tasks around Westminster.
///  #1 Buy stamps     51.5008,-0.1247  (~13 m from Big Ben)
///  #2 Return books   51.5033,-0.1195  (~450 m)
///  #3 Visit museum   51.5194,-0.1270  (~2 km)
pub fn init_db_with_tasks(db_path: &str) {
    init_db(db_path);

    for (text, lat, lon) in [
        ("Buy stamps", "51.5008", "-0.1247"),
        ("Return books", "51.5033", "-0.1195"),
        ("Visit museum", "51.5194", "-0.1270"),
    ] {
        gt().args(["--db", db_path, "add", text, "--lat", lat, "--lon", lon])
            .assert()
            .success();
    }
}

pub fn task(id: i64, text: &str, lat: f64, lon: f64) -> Task {
    let mut t = Task::new(text, Coordinate::new(lat, lon));
    t.id = id;
    t
}

/// Wait for spawned local tasks to make progress.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

// ---------------------------------------------------------------------------
// In-memory doubles for the tracking traits
// ---------------------------------------------------------------------------

pub struct MemoryStore {
    pub tasks: RefCell<Vec<Task>>,
    pub fail: Cell<bool>,
    pub fetches: Cell<u32>,
}

impl MemoryStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            fail: Cell::new(false),
            fetches: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl TaskSource for MemoryStore {
    async fn fetch_open_tasks(&self) -> AppResult<Vec<Task>> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail.get() {
            return Err(AppError::StoreUnavailable("store offline".into()));
        }
        Ok(self
            .tasks
            .borrow()
            .iter()
            .filter(|t| !t.completed)
            .cloned()
            .collect())
    }
}

/// Location platform fed by the test through [`FakeLocation::push`].
pub struct FakeLocation {
    pub supported: bool,
    pub origin: String,
    pub permission: PermissionState,
    pub fail_watch: Option<LocationError>,
    pub fix: Option<LocationSample>,
    pub watch_calls: Cell<u32>,
    sender: RefCell<Option<UnboundedSender<PositionResult>>>,
}

impl FakeLocation {
    pub fn new() -> Self {
        Self {
            supported: true,
            origin: "https://geotask.example".into(),
            permission: PermissionState::Granted,
            fail_watch: None,
            fix: None,
            watch_calls: Cell::new(0),
            sender: RefCell::new(None),
        }
    }

    pub fn push(&self, update: PositionResult) -> bool {
        self.sender
            .borrow()
            .as_ref()
            .is_some_and(|tx| tx.send(update).is_ok())
    }

    pub fn push_sample(&self, sample: LocationSample) -> bool {
        self.push(Ok(sample))
    }

    /// Close the feed, as a platform does when it runs out of data.
    pub fn close(&self) {
        self.sender.borrow_mut().take();
    }
}

#[async_trait(?Send)]
impl LocationPlatform for FakeLocation {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn origin(&self) -> &str {
        &self.origin
    }

    async fn permission_state(&self) -> PermissionState {
        self.permission
    }

    fn watch_position(&self, _options: &PositionOptions) -> Result<PositionSubscription, LocationError> {
        self.watch_calls.set(self.watch_calls.get() + 1);
        if let Some(e) = &self.fail_watch {
            return Err(e.clone());
        }
        let (tx, _cancel, subscription) = PositionSubscription::channel();
        self.sender.borrow_mut().replace(tx);
        Ok(subscription)
    }

    async fn current_position(&self, options: &PositionOptions) -> PositionResult {
        self.fix.ok_or(LocationError::Timeout(options.timeout_ms))
    }
}

/// Notification sink that records what it was asked to show.
pub struct RecordingNotifications {
    pub supported: bool,
    pub permission: Cell<PermissionState>,
    pub answer: PermissionState,
    pub fail_show: bool,
    pub shown: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifications {
    pub fn new(permission: PermissionState) -> Self {
        Self {
            supported: true,
            permission: Cell::new(permission),
            answer: PermissionState::Granted,
            fail_show: false,
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn bodies(&self) -> Vec<String> {
        self.shown.borrow().iter().map(|(_, b)| b.clone()).collect()
    }
}

#[async_trait(?Send)]
impl NotificationPlatform for RecordingNotifications {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn permission(&self) -> PermissionState {
        self.permission.get()
    }

    async fn request_permission(&self) -> PermissionState {
        if self.permission.get() == PermissionState::Prompt {
            self.permission.set(self.answer);
        }
        self.permission.get()
    }

    fn show(&self, title: &str, body: &str) -> AppResult<()> {
        if self.fail_show {
            return Err(AppError::Other("display unavailable".into()));
        }
        self.shown
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}
