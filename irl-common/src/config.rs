//! Configuration loading
//!
//! Resolves the database path and the login passcode with the same priority
//! order everywhere: command-line argument, then environment variable, then
//! TOML config file, then compiled default.

use std::path::PathBuf;

/// Passcode shipped with the tool; override it via CLI, environment, or the
/// config file for anything beyond a trusted consortium.
pub const DEFAULT_PASSCODE: &str = "DECODE";

/// Environment variable naming the database file.
pub const DB_PATH_ENV: &str = "IRL_DB_PATH";

/// Environment variable overriding the login passcode.
pub const PASSCODE_ENV: &str = "IRL_PASSCODE";

/// Resolve the feedback database path.
pub fn resolve_db_path(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Some(path) = config_file_value("db_path") {
        return PathBuf::from(path);
    }

    // Priority 4: OS-dependent compiled default
    default_db_path()
}

/// Resolve the shared login passcode.
pub fn resolve_passcode(cli_arg: Option<&str>) -> String {
    if let Some(passcode) = cli_arg {
        return passcode.to_string();
    }

    if let Ok(passcode) = std::env::var(PASSCODE_ENV) {
        return passcode;
    }

    if let Some(passcode) = config_file_value("passcode") {
        return passcode;
    }

    DEFAULT_PASSCODE.to_string()
}

/// Read one string key from the config file, if the file exists and parses.
fn config_file_value(key: &str) -> Option<String> {
    let path = config_file_path()?;
    let content = std::fs::read_to_string(path).ok()?;
    let config = toml::from_str::<toml::Value>(&content).ok()?;
    config.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

/// Platform config file location: `<config dir>/irl-wizard/config.toml`.
fn config_file_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("irl-wizard").join("config.toml");
    path.exists().then_some(path)
}

/// Default database location: `<local data dir>/irl-wizard/feedback.db`,
/// falling back to the working directory when no data dir is known.
fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("irl-wizard").join("feedback.db"))
        .unwrap_or_else(|| PathBuf::from("./irl_feedback.db"))
}
