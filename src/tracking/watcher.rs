//! Continuous location tracking.
//!
//! [`LocationWatcher`] owns one position subscription and, for every sample
//! that passes the [`SignificanceFilter`], starts a proximity check whose
//! matches are handed to the [`Notifier`].
//!
//! Everything runs on a single thread: the pump and each check are
//! `spawn_local` tasks, so the watcher must be started from inside a
//! [`tokio::task::LocalSet`]. Checks are fire-and-forget. Two may overlap,
//! and a check started before [`LocationWatcher::stop`] still completes.

use crate::core::calculator::significance::SignificanceFilter;
use crate::models::location::{Coordinate, LocationSample};
use crate::tracking::error::LocationError;
use crate::tracking::history::LocationHistory;
use crate::tracking::notifier::Notifier;
use crate::tracking::platform::{
    LocationPlatform, PositionOptions, PositionSubscription, check_preconditions,
};
use crate::tracking::proximity::ProximityChecker;
use crate::ui::messages::warning;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tokio::task::{self, JoinHandle};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    Stopped,
    Starting,
    Active,
}

#[derive(Debug, Clone, Copy)]
pub struct WatcherSettings {
    pub filter: SignificanceFilter,
    pub options: PositionOptions,
    /// Also require a secure origin and a non-denied permission on start.
    pub strict: bool,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            filter: SignificanceFilter::default(),
            options: PositionOptions::default(),
            strict: true,
        }
    }
}

/// State shared between the watcher handle, its pump and running checks.
struct Tracker {
    checker: ProximityChecker,
    notifier: Notifier,
    filter: SignificanceFilter,
    active: Cell<bool>,
    last_location: RefCell<Option<LocationSample>>,
    history: RefCell<LocationHistory>,
    checks_started: Cell<u64>,
    notifications_sent: Cell<u64>,
}

impl Tracker {
    /// Apply the significance filter and, on acceptance, remember the sample.
    fn accept(&self, sample: &LocationSample) -> bool {
        let mut last = self.last_location.borrow_mut();
        if !self.filter.is_significant(last.as_ref(), sample) {
            return false;
        }
        *last = Some(*sample);
        self.history.borrow_mut().record(*sample);
        true
    }

    async fn check_and_notify(&self, at: Coordinate) -> usize {
        let nearby = self.checker.check_nearby(&at).await;
        if nearby.is_empty() {
            return 0;
        }
        let shown = self.notifier.notify(&nearby).await;
        self.notifications_sent
            .set(self.notifications_sent.get() + shown as u64);
        shown
    }
}

fn dispatch_sample(tracker: &Rc<Tracker>, sample: LocationSample) -> bool {
    if !tracker.active.get() || !tracker.accept(&sample) {
        return false;
    }

    tracker.checks_started.set(tracker.checks_started.get() + 1);

    let tracker = Rc::clone(tracker);
    task::spawn_local(async move {
        tracker.check_and_notify(sample.coordinate).await;
    });
    true
}

async fn pump(mut subscription: PositionSubscription, tracker: Rc<Tracker>) {
    while let Some(update) = subscription.next().await {
        match update {
            Ok(sample) => {
                dispatch_sample(&tracker, sample);
            }
            Err(e) => warning(format!("Location update failed: {}", e)),
        }
    }
}

pub struct LocationWatcher {
    platform: Rc<dyn LocationPlatform>,
    tracker: Rc<Tracker>,
    options: PositionOptions,
    strict: bool,
    state: WatcherState,
    cancel: Option<CancellationToken>,
    pump: Option<JoinHandle<()>>,
}

impl LocationWatcher {
    pub fn new(
        platform: Rc<dyn LocationPlatform>,
        checker: ProximityChecker,
        notifier: Notifier,
        settings: WatcherSettings,
    ) -> Self {
        let tracker = Tracker {
            checker,
            notifier,
            filter: settings.filter,
            active: Cell::new(false),
            last_location: RefCell::new(None),
            history: RefCell::new(LocationHistory::default()),
            checks_started: Cell::new(0),
            notifications_sent: Cell::new(0),
        };

        Self {
            platform,
            tracker: Rc::new(tracker),
            options: settings.options,
            strict: settings.strict,
            state: WatcherState::Stopped,
            cancel: None,
            pump: None,
        }
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    /// Subscribe to the platform and begin processing samples.
    ///
    /// A failed precondition or subscription leaves the watcher `Stopped`.
    /// Calling `start` on a running watcher does nothing.
    pub async fn start(&mut self) -> Result<(), LocationError> {
        if self.state != WatcherState::Stopped {
            return Ok(());
        }
        self.state = WatcherState::Starting;

        if let Err(e) = check_preconditions(self.platform.as_ref(), self.strict).await {
            self.state = WatcherState::Stopped;
            return Err(e);
        }

        let subscription = match self.platform.watch_position(&self.options) {
            Ok(s) => s,
            Err(e) => {
                self.state = WatcherState::Stopped;
                return Err(e);
            }
        };

        self.cancel = Some(subscription.cancel_token());
        self.tracker.active.set(true);
        self.state = WatcherState::Active;
        self.pump = Some(task::spawn_local(pump(
            subscription,
            Rc::clone(&self.tracker),
        )));

        Ok(())
    }

    /// Cancel the subscription and forget the last known location.
    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.pump = None;
        self.tracker.active.set(false);
        self.tracker.last_location.borrow_mut().take();
        self.tracker.history.borrow_mut().clear();
        self.state = WatcherState::Stopped;
    }

    /// Resolves once the platform stops delivering samples.
    /// Returns immediately when the watcher is not running.
    pub async fn finished(&mut self) {
        if let Some(handle) = self.pump.as_mut() {
            if let Err(e) = handle.await {
                warning(format!("Location pump ended abnormally: {}", e));
            }
            self.pump = None;
        }
    }

    /// Feed one sample through the filter as if the platform delivered it.
    /// Returns whether a proximity check was started.
    pub fn handle_sample(&self, sample: LocationSample) -> bool {
        dispatch_sample(&self.tracker, sample)
    }

    pub fn last_location(&self) -> Option<LocationSample> {
        *self.tracker.last_location.borrow()
    }

    pub fn history_len(&self) -> usize {
        self.tracker.history.borrow().len()
    }

    pub fn checks_started(&self) -> u64 {
        self.tracker.checks_started.get()
    }

    pub fn notifications_sent(&self) -> u64 {
        self.tracker.notifications_sent.get()
    }
}

impl Drop for LocationWatcher {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}
