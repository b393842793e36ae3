//! Configuration file upkeep: detect keys missing from an older config file
//! and fill them with their defaults, keeping every value already set.

use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Every top-level key a complete config file carries, in file order.
fn expected_keys() -> io::Result<Mapping> {
    let defaults = serde_yaml::to_value(super::Config::default())
        .map_err(|e| io::Error::other(format!("Failed to serialize default config: {}", e)))?;

    match defaults {
        Value::Mapping(m) => Ok(m),
        _ => Err(io::Error::other("Default config is not a mapping")),
    }
}

fn read_mapping(conf: &Path) -> io::Result<Mapping> {
    let content = fs::read_to_string(conf)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(io::Error::other(format!("{:?} is not a YAML mapping", conf))),
        Err(e) => Err(io::Error::other(format!("Failed to parse {:?}: {}", conf, e))),
    }
}

/// Keys present in the defaults but absent from `conf`.
pub fn missing_keys(conf: &Path) -> io::Result<Vec<String>> {
    let current = read_mapping(conf)?;
    let expected = expected_keys()?;

    Ok(expected
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
/// Returns the names of the keys that were added (empty → file untouched).
pub fn fill_missing_keys(conf: &Path) -> io::Result<Vec<String>> {
    let mut current = read_mapping(conf)?;
    let expected = expected_keys()?;
    let mut added = Vec::new();

    for (key, value) in expected {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current)).map_err(|e| {
        io::Error::other(format!("Failed to serialize YAML for {:?}: {}", conf, e))
    })?;
    fs::write(conf, serialized)?;

    success(format!(
        "Config migration performed: added {}",
        added.join(", ")
    ));

    Ok(added)
}
