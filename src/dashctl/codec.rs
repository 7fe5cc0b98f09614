//! # File Codec
//!
//! Converts between the wire form of a dashboard and its file form.
//!
//! A dashboard file is a UTF-8, 2-space indented JSON object with exactly the
//! keys `id`, `title`, `description` and `graphs`, in that order:
//!
//! ```text
//! {
//!   "id": "1234",
//!   "title": "CPU Usage",
//!   "description": "Hosts in prod",
//!   "graphs": [ ... ]
//! }
//! ```
//!
//! Anything else the service returns (`resource`, `url`, timestamps) is dropped
//! on the way in, since [`Dashboard`] only models the editable contract.

use crate::error::{DashError, Result};
use crate::model::Dashboard;
use crate::response::Response;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// Extracts the dashboard from a `{"dash": {...}}` response body.
pub fn from_response(body: &Value) -> Result<Dashboard> {
    Response::payload(body, "dash")
}

pub fn to_json(dash: &Dashboard) -> Result<String> {
    let mut out = serde_json::to_string_pretty(dash)
        .map_err(|e| DashError::MalformedData(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// Writes `dash` to `path`, replacing whatever was there.
pub fn write_file(path: &Path, dash: &Dashboard) -> Result<()> {
    let content = to_json(dash)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "dashboard written");
    Ok(())
}

/// Parses a dashboard that must carry an `id`, as required for pushing.
pub fn read<R: Read>(reader: R, source: &str) -> Result<Dashboard> {
    let dash = read_draft(reader, source)?;
    if dash.id.is_none() {
        return Err(DashError::MalformedData(format!(
            "{}: missing field `id`",
            source
        )));
    }
    Ok(dash)
}

/// Parses a dashboard that may not have been created yet.
pub fn read_draft<R: Read>(reader: R, source: &str) -> Result<Dashboard> {
    serde_json::from_reader(reader)
        .map_err(|e| DashError::MalformedData(format!("{}: {}", source, e)))
}

pub fn read_path(path: &Path) -> Result<Dashboard> {
    let file = File::open(path)?;
    read(BufReader::new(file), &path.display().to_string())
}
