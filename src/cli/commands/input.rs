//! Reading JSON states from files or stdin.

use serde_json::Value;
use std::fs;
use std::io::Read;

use crate::error::Result;

/// Marker for reading from stdin instead of a file.
pub const STDIN: &str = "-";

/// Read and parse a JSON state from `source`, a file path or [`STDIN`].
pub fn read_state(source: &str) -> Result<Value> {
    let text = if source == STDIN {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(source)?
    };
    parse_state(&text)
}

/// Parse a JSON state.
pub fn parse_state(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}
