//! Capabilities the tracking pipeline needs from its host: a position
//! source and a notification sink.

use crate::errors::AppResult;
use crate::models::location::LocationSample;
use crate::tracking::error::LocationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

pub type PositionResult = Result<LocationSample, LocationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Granted => "granted",
            PermissionState::Prompt => "prompt",
            PermissionState::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u64,
    /// Age in ms of a cached fix that may be returned instead of a fresh one.
    pub maximum_age_ms: u64,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 0,
        }
    }
}

/// A live stream of position reports.
///
/// Dropping or cancelling the subscription tells the producer to stop;
/// `next` returns `None` once cancelled or once the producer is done.
pub struct PositionSubscription {
    rx: mpsc::UnboundedReceiver<PositionResult>,
    cancel: CancellationToken,
}

impl PositionSubscription {
    pub fn new(rx: mpsc::UnboundedReceiver<PositionResult>, cancel: CancellationToken) -> Self {
        Self { rx, cancel }
    }

    /// Convenience for producers: returns the sender half and the subscription.
    pub fn channel() -> (mpsc::UnboundedSender<PositionResult>, CancellationToken, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        (tx, cancel.clone(), Self::new(rx, cancel))
    }

    pub async fn next(&mut self) -> Option<PositionResult> {
        if self.cancel.is_cancelled() {
            return None;
        }
        tokio::select! {
            _ = self.cancel.cancelled() => None,
            item = self.rx.recv() => item,
        }
    }

    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.rx.close();
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for PositionSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[async_trait(?Send)]
pub trait LocationPlatform {
    /// Whether any position source exists at all.
    fn is_supported(&self) -> bool;

    /// Origin the app runs under, used for the secure-context check.
    fn origin(&self) -> &str;

    async fn permission_state(&self) -> PermissionState;

    /// Start continuous position reports.
    fn watch_position(&self, options: &PositionOptions) -> Result<PositionSubscription, LocationError>;

    /// Single position request.
    async fn current_position(&self, options: &PositionOptions) -> PositionResult;
}

#[async_trait(?Send)]
pub trait NotificationPlatform {
    fn is_supported(&self) -> bool;

    async fn permission(&self) -> PermissionState;

    /// Ask the user; returns the resulting state.
    async fn request_permission(&self) -> PermissionState;

    fn show(&self, title: &str, body: &str) -> AppResult<()>;
}

/// `https`, `file`, and any localhost origin count as secure.
pub fn is_secure_origin(origin: &str) -> bool {
    let Ok(url) = Url::parse(origin) else {
        return false;
    };

    match url.scheme() {
        "https" | "wss" | "file" => true,
        _ => matches!(
            url.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        ) || url
            .host_str()
            .is_some_and(|h| h.ends_with(".localhost")),
    }
}

/// Checks run before any position request.
///
/// `strict` adds the secure-origin and permission checks on top of the
/// capability check.
pub async fn check_preconditions<P>(platform: &P, strict: bool) -> Result<(), LocationError>
where
    P: LocationPlatform + ?Sized,
{
    if !platform.is_supported() {
        return Err(LocationError::UnsupportedCapability);
    }

    if strict {
        if !is_secure_origin(platform.origin()) {
            return Err(LocationError::InsecureContext(platform.origin().to_string()));
        }
        if platform.permission_state().await == PermissionState::Denied {
            return Err(LocationError::PermissionDenied);
        }
    }

    Ok(())
}

/// One-shot position lookup, independent of any watcher.
pub async fn get_current_location<P>(
    platform: &P,
    options: &PositionOptions,
    strict: bool,
) -> PositionResult
where
    P: LocationPlatform + ?Sized,
{
    check_preconditions(platform, strict).await?;
    platform.current_position(options).await
}
