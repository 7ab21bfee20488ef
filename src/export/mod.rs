//! Trace and snapshot export.
//!
//! A trace exports as a JSON array of step records, indented with four
//! spaces. A snapshot is the rendered text of one step.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::common::Result;
use crate::trace::{StepRecord, Trace};

const JSON_INDENT: &[u8] = b"    ";

/// Encode the steps of `trace` as pretty-printed JSON.
pub fn trace_to_json(trace: &Trace) -> Result<String> {
    into_utf8(encode_steps(trace.steps())?)
}

/// Decode step records from a JSON export.
pub fn steps_from_json(json: &str) -> Result<Vec<StepRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Write the JSON export of `trace` to `path`, replacing any existing file.
///
/// # Errors
/// - `Error::Io` if the file cannot be written
pub fn write_trace_json<P: AsRef<Path>>(trace: &Trace, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_steps(trace.steps())?;
    fs::write(path, &bytes)?;

    info!(path = %path.display(), steps = trace.len(), bytes = bytes.len(), "exported trace");
    Ok(())
}

/// Write rendered text (typically a [`crate::render::StepView`]) to `path`.
pub fn write_snapshot<P: AsRef<Path>>(rendered: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, rendered)?;

    info!(path = %path.display(), "exported snapshot");
    Ok(())
}

/// CRC32 of the JSON export.
///
/// Two runs over the same input produce the same fingerprint.
pub fn fingerprint(trace: &Trace) -> Result<u32> {
    let bytes = encode_steps(trace.steps())?;
    Ok(crc32fast::hash(&bytes))
}

fn encode_steps(steps: &[StepRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    steps.serialize(&mut serializer)?;
    Ok(buf)
}

fn into_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
