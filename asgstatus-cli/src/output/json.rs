//! JSON output formatting.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indent used for command output.
const INDENT: &[u8] = b"    ";

/// Serializes `value` as JSON indented with four spaces.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .context("Failed to Marshal JSON")?;
    String::from_utf8(buf).context("JSON output was not UTF-8")
}

/// Prints `value` to stdout as indented JSON.
pub fn print_pretty<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}
