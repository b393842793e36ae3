use crate::config::Config;
use crate::errors::AppResult;
use crate::models::location::LocationSample;
use crate::tracking::platform::get_current_location;
use crate::tracking::replay::{ReplayPlatform, ReplaySource};

/// Build the location platform for this run. An explicit `source` wins over
/// `location_source` from the config; with neither, the platform reports
/// itself unsupported.
pub fn location_platform(cfg: &Config, source: Option<&str>) -> ReplayPlatform {
    let source = source
        .map(str::to_string)
        .or_else(|| cfg.location_source.clone())
        .map(|s| ReplaySource::parse(&s));

    ReplayPlatform::new(source, cfg.origin.clone(), cfg.location_permission)
}

pub struct LocateLogic;

impl LocateLogic {
    /// One-shot position lookup.
    pub async fn current(cfg: &Config, source: Option<&str>) -> AppResult<LocationSample> {
        let platform = location_platform(cfg, source);
        let sample = get_current_location(
            &platform,
            &cfg.position_options(),
            cfg.strict_location_checks,
        )
        .await?;
        Ok(sample)
    }
}
