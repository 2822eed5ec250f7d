//! D-Link archive layout: which top-level folders to ignore, how product names
//! map to device categories, and how metadata is read off file names and
//! listing facts.
//!
//! Every extractor is pure and returns a `Result`; the caller decides whether
//! an error becomes a `null` field.

mod tables;

use chrono::NaiveDateTime;

use self::tables::{ACCESS_POINT_FAMILY, ACCESS_POINT_LABEL, ACCESS_POINT_MARKER, DEVICE_CLASSES, SKIPPED_DIRECTORIES};

/// Format of the MLSD `modify` fact.
const MODIFY_FORMAT: &str = "%Y%m%d%H%M%S";

/// Index of the version field once a firmware file name is split on `_`.
const VERSION_FIELD: usize = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no device class known for family '{family}' (product '{product}')")]
    UnknownFamily { family: String, product: String },
    #[error("listing entry has no modify fact")]
    MissingTimestamp,
    #[error("time data '{value}' does not match format '%Y%m%d%H%M%S': {reason}")]
    InvalidTimestamp { value: String, reason: String },
    #[error("file name '{0}' has no version field")]
    MissingVersionField(String),
}

/// Exact-name check against the top-level skip list.
pub fn is_skipped(directory_name: &str) -> bool {
    SKIPPED_DIRECTORIES.contains(&directory_name)
}

/// Family code of a product directory, i.e. everything before the first `-`.
pub fn family_code(product: &str) -> &str {
    product.split('-').next().unwrap_or(product)
}

/// Device category for a product directory such as `dir-825`.
pub fn classify_device(product: &str) -> Result<&'static str, ExtractError> {
    let family = family_code(product);
    let label = DEVICE_CLASSES
        .iter()
        .find(|(code, _)| *code == family)
        .map(|(_, label)| *label)
        .ok_or_else(|| ExtractError::UnknownFamily {
            family: family.to_string(),
            product: product.to_string(),
        })?;

    if family == ACCESS_POINT_FAMILY && product.contains(ACCESS_POINT_MARKER) {
        return Ok(ACCESS_POINT_LABEL);
    }

    Ok(label)
}

/// Seconds since the Unix epoch for a `modify` fact, read as UTC.
pub fn release_timestamp(modify: Option<&str>) -> Result<f64, ExtractError> {
    let value = modify.ok_or(ExtractError::MissingTimestamp)?;
    let parsed = NaiveDateTime::parse_from_str(value, MODIFY_FORMAT).map_err(|e| ExtractError::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    Ok(parsed.and_utc().timestamp() as f64)
}

/// Fourth `_`-separated field of a firmware file name,
/// e.g. `v2.10` in `dir825_revb_fw_v2.10_eu.zip`.
pub fn firmware_version(file_name: &str) -> Result<String, ExtractError> {
    file_name
        .split('_')
        .nth(VERSION_FIELD)
        .map(str::to_string)
        .ok_or_else(|| ExtractError::MissingVersionField(file_name.to_string()))
}
