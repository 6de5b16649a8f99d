//! Payload and record parsing shared by the codec subcommands.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::exit::{io_error, json_error, CliError, CliResult};

/// Parse a hex payload. Whitespace and a leading `0x` are ignored.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(compact.as_str());
    hex::decode(digits).map_err(|err| CliError::invalid(format!("invalid hex payload: {err}")))
}

pub fn parse_time(input: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|err| CliError::usage(format!("invalid RFC 3339 time {input:?}: {err}")))
}

/// Deserialize a record from `--json` text or a `--file` path.
pub fn read_json<T: DeserializeOwned>(json: Option<&str>, file: Option<&Path>) -> CliResult<T> {
    if let Some(json) = json {
        return serde_json::from_str(json).map_err(|err| json_error("--json is not valid", err));
    }
    if let Some(path) = file {
        let text = fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
        return serde_json::from_str(&text)
            .map_err(|err| json_error(&format!("{} is not valid", path.display()), err));
    }
    Err(CliError::usage("no input given"))
}
