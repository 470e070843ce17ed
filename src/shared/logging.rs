use chrono::{SecondsFormat, Utc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "omniverse.log";

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Formats `event key=value ...` prefixed with an RFC 3339 UTC timestamp.
pub fn format_log_line(event: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!(
        "{} {event}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    for (key, value) in fields {
        line.push_str(&format!(" {key}={value}"));
    }
    line
}

pub fn append_log_line(log_dir: &Path, line: &str) -> std::io::Result<()> {
    fs::create_dir_all(log_dir)?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(log_dir))?;
    writeln!(file, "{line}")
}
