use std::env;
use std::fs;

use log::{info, warn};
use thiserror::Error;

use outcome::{assign_or_return, bail_errno, present_or_return, Outcome};

#[derive(Debug, Error)]
enum SettingError {
    #[error("environment variable '{0}' is not set")]
    Missing(&'static str),
    #[error("environment variable '{0}' is not unicode")]
    NotUnicode(&'static str),
    #[error("value '{value}' of '{key}' is not an integer")]
    NotAnInteger { key: &'static str, value: String },
}

impl From<SettingError> for String {
    fn from(error: SettingError) -> Self {
        error.to_string()
    }
}

fn setting(key: &'static str) -> Outcome<String, SettingError> {
    let raw = present_or_return!(env::var_os(key), SettingError::Missing(key));
    match raw.into_string() {
        Ok(text) => Outcome::success(text),
        Err(_) => Outcome::failure(SettingError::NotUnicode(key)),
    }
}

fn int_setting(key: &'static str) -> Outcome<i64, SettingError> {
    assign_or_return!(raw, setting(key));
    match raw.parse::<i64>() {
        Ok(number) => Outcome::success(number),
        Err(_) => Outcome::failure(SettingError::NotAnInteger { key, value: raw }),
    }
}

/// Reads the worker count, folding any setting error into the caller's
/// string domain.
fn worker_count() -> Outcome<i64, String> {
    assign_or_return!(count: i64, int_setting("WORKERS"));
    if !(1..=64).contains(&count) {
        return Outcome::failure(format!("WORKERS must be between 1 and 64, got {}", count));
    }
    Outcome::success(count)
}

fn data_dir_bytes(path: &str) -> Outcome<u64, String> {
    match fs::metadata(path) {
        Ok(meta) => Outcome::success(meta.len()),
        Err(_) => bail_errno!("cannot stat '{}'", path),
    }
}

fn main() {
    env_logger::init();

    match worker_count() {
        Outcome::Success(count) => info!("starting {} workers", count),
        Outcome::Failure(reason) => warn!("falling back to one worker: {}", reason),
    }

    let retries = int_setting("RETRIES").map(|n| n.clamp(0, 10)).take_value_or(3);
    info!("will retry failed jobs {} times", retries);

    let data_dir = env::args().nth(1).unwrap_or_else(|| "/var/lib".to_string());
    match data_dir_bytes(&data_dir) {
        Outcome::Success(bytes) => info!("data dir '{}' holds {} bytes", data_dir, bytes),
        Outcome::Failure(reason) => warn!("{}", reason),
    }
}
