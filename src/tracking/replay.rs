//! Location platform that replays recorded samples from a file or stdin.
//!
//! One sample per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! 51.5007,-0.1246,0
//! 51.5007,-0.1246,500,4.5
//! {"latitude": 51.5, "longitude": -0.12, "timestamp": 61000}
//! {"error": "timeout"}
//! ```
//!
//! Missing timestamps are stamped with the wall clock on read.

use crate::models::location::{Coordinate, LocationSample};
use crate::tracking::error::LocationError;
use crate::tracking::platform::{
    LocationPlatform, PermissionState, PositionOptions, PositionResult, PositionSubscription,
};
use crate::utils::path::expand_tilde;
use crate::utils::time::now_millis;
use async_trait::async_trait;
use serde::Deserialize;
use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaySource {
    Stdin,
    File(PathBuf),
}

impl ReplaySource {
    /// `-` selects stdin, anything else is a file path (`~/` expanded).
    pub fn parse(arg: &str) -> Self {
        if arg.trim() == "-" {
            ReplaySource::Stdin
        } else {
            ReplaySource::File(expand_tilde(arg.trim()))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ReplaySource::Stdin => "<stdin>".to_string(),
            ReplaySource::File(p) => p.display().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplayRecord {
    Fix {
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        timestamp: Option<i64>,
        #[serde(default)]
        accuracy: Option<f64>,
    },
    Failure {
        error: String,
        #[serde(default)]
        message: Option<String>,
    },
}

fn fix(latitude: f64, longitude: f64, timestamp: Option<i64>, accuracy: Option<f64>) -> PositionResult {
    let coordinate = Coordinate::validated(latitude, longitude)
        .map_err(|e| LocationError::PositionUnavailable(e.to_string()))?;
    let sample = LocationSample::new(coordinate, timestamp.unwrap_or_else(now_millis));
    Ok(match accuracy {
        Some(a) => sample.with_accuracy(a),
        None => sample,
    })
}

/// Parse one replay line. `None` means the line carries no sample.
pub fn parse_line(line: &str, timeout_ms: u64) -> Option<PositionResult> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if line.starts_with('{') {
        let record = match serde_json::from_str::<ReplayRecord>(line) {
            Ok(r) => r,
            Err(e) => {
                return Some(Err(LocationError::PositionUnavailable(format!(
                    "unreadable sample '{}': {}",
                    line, e
                ))));
            }
        };
        return Some(match record {
            ReplayRecord::Fix {
                latitude,
                longitude,
                timestamp,
                accuracy,
            } => fix(latitude, longitude, timestamp, accuracy),
            ReplayRecord::Failure { error, message } => Err(match error.to_lowercase().as_str() {
                "timeout" => LocationError::Timeout(timeout_ms),
                "denied" | "permission_denied" => LocationError::PermissionDenied,
                _ => LocationError::PositionUnavailable(message.unwrap_or(error)),
            }),
        });
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(2..=4).contains(&fields.len()) {
        return Some(Err(LocationError::PositionUnavailable(format!(
            "unreadable sample '{}'",
            line
        ))));
    }

    let unreadable = || LocationError::PositionUnavailable(format!("unreadable sample '{}'", line));

    let parsed = (|| {
        let lat: f64 = fields[0].parse().map_err(|_| unreadable())?;
        let lon: f64 = fields[1].parse().map_err(|_| unreadable())?;
        let ts = match fields.get(2) {
            Some(t) if !t.is_empty() => Some(t.parse::<i64>().map_err(|_| unreadable())?),
            _ => None,
        };
        let acc = match fields.get(3) {
            Some(a) if !a.is_empty() => Some(a.parse::<f64>().map_err(|_| unreadable())?),
            _ => None,
        };
        fix(lat, lon, ts, acc)
    })();

    Some(parsed)
}

async fn open_reader(source: &ReplaySource) -> std::io::Result<Box<dyn AsyncBufRead + Unpin>> {
    let reader: Box<dyn AsyncBufRead + Unpin> = match source {
        ReplaySource::Stdin => Box::new(BufReader::new(tokio::io::stdin())),
        ReplaySource::File(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
    };
    Ok(reader)
}

async fn first_fix(source: &ReplaySource, timeout_ms: u64) -> PositionResult {
    let unavailable = |e: std::io::Error| LocationError::PositionUnavailable(e.to_string());

    let reader = open_reader(source).await.map_err(unavailable)?;
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.map_err(unavailable)? {
        if let Some(result) = parse_line(&line, timeout_ms) {
            return result;
        }
    }

    Err(LocationError::PositionUnavailable(format!(
        "{} produced no position",
        source.describe()
    )))
}

pub struct ReplayPlatform {
    source: Option<ReplaySource>,
    origin: String,
    permission: PermissionState,
    realtime: bool,
    cached: RefCell<Option<LocationSample>>,
}

impl ReplayPlatform {
    pub fn new(source: Option<ReplaySource>, origin: impl Into<String>, permission: PermissionState) -> Self {
        Self {
            source,
            origin: origin.into(),
            permission,
            realtime: false,
            cached: RefCell::new(None),
        }
    }

    /// Space deliveries by the gaps between sample timestamps.
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    pub fn source(&self) -> Option<&ReplaySource> {
        self.source.as_ref()
    }
}

#[async_trait(?Send)]
impl LocationPlatform for ReplayPlatform {
    fn is_supported(&self) -> bool {
        self.source.is_some()
    }

    fn origin(&self) -> &str {
        &self.origin
    }

    async fn permission_state(&self) -> PermissionState {
        self.permission
    }

    fn watch_position(&self, options: &PositionOptions) -> Result<PositionSubscription, LocationError> {
        let source = self
            .source
            .clone()
            .ok_or(LocationError::UnsupportedCapability)?;
        let (tx, cancel, subscription) = PositionSubscription::channel();
        let realtime = self.realtime;
        let timeout_ms = options.timeout_ms;

        task::spawn_local(async move {
            let reader = match open_reader(&source).await {
                Ok(r) => r,
                Err(e) => {
                    let _ = tx.send(Err(LocationError::PositionUnavailable(e.to_string())));
                    return;
                }
            };
            let mut lines = reader.lines();
            let mut previous_ts: Option<i64> = None;

            loop {
                let line = tokio::select! {
                    _ = cancel.cancelled() => break,
                    line = lines.next_line() => line,
                };

                let item = match line {
                    Ok(Some(l)) => match parse_line(&l, timeout_ms) {
                        Some(item) => item,
                        None => continue,
                    },
                    Ok(None) => break,
                    Err(e) => {
                        let _ = tx.send(Err(LocationError::PositionUnavailable(e.to_string())));
                        break;
                    }
                };

                if realtime && let Ok(sample) = &item {
                    if let Some(prev) = previous_ts {
                        let gap = sample.timestamp.saturating_sub(prev).max(0) as u64;
                        tokio::select! {
                            _ = cancel.cancelled() => break,
                            _ = tokio::time::sleep(Duration::from_millis(gap)) => {}
                        }
                    }
                    previous_ts = Some(sample.timestamp);
                }

                if tx.send(item).is_err() {
                    break;
                }
            }
        });

        Ok(subscription)
    }

    async fn current_position(&self, options: &PositionOptions) -> PositionResult {
        let cached = *self.cached.borrow();
        if options.maximum_age_ms > 0
            && let Some(sample) = cached
            && now_millis().saturating_sub(sample.timestamp) <= options.maximum_age_ms as i64
        {
            return Ok(sample);
        }

        let source = self
            .source
            .as_ref()
            .ok_or(LocationError::UnsupportedCapability)?;

        let lookup = first_fix(source, options.timeout_ms);
        let sample = tokio::time::timeout(Duration::from_millis(options.timeout_ms), lookup)
            .await
            .map_err(|_| LocationError::Timeout(options.timeout_ms))??;

        self.cached.borrow_mut().replace(sample);
        Ok(sample)
    }
}
