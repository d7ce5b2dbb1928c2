//! Request body resolution for the `eval` command.
//!
//! Supports three input sources:
//! - Inline JSON string as the positional argument
//! - JSON file via `--input-file` / `-f`
//! - Stdin via `--input-file -`

use std::io::Read;
use std::path::Path;

use serde_json::Value;

/// Resolves and parses the request body from CLI arguments.
///
/// Priority: `--input-file` takes precedence over the inline body.
/// If `input_file` is `Some("-")`, reads from stdin.
///
/// # Errors
///
/// Returns an error if no source is given, the file cannot be read, or the
/// content is not JSON.
pub fn resolve_body(inline: Option<&str>, input_file: Option<&str>) -> anyhow::Result<Value> {
    let raw = match (input_file, inline) {
        (Some("-"), _) => read_from_stdin()?,
        (Some(path), _) => read_from_file(path)?,
        (None, Some(body)) => body.to_string(),
        (None, None) => anyhow::bail!("no request body: pass inline JSON or --input-file"),
    };
    parse_json(raw.trim())
}

/// Reads the body from a file path.
fn read_from_file(path: &str) -> anyhow::Result<String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("input file not found: {path}");
    }
    std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("failed to read input file: {e}"))
}

/// Reads the body from stdin.
fn read_from_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
    Ok(buffer)
}

fn parse_json(input: &str) -> anyhow::Result<Value> {
    serde_json::from_str(input).map_err(|e| anyhow::anyhow!("invalid JSON input: {e}"))
}
