//! Abstract text-oracle trait (port) for the `AI` operation.

use async_trait::async_trait;

/// Answer when the upstream replied without any text.
pub const NO_RESPONSE: &str = "NoResponse";
/// Heuristic answer when no cue matches.
pub const UNKNOWN: &str = "Unknown";
/// Heuristic answer when no cue matches and the upstream call failed.
pub const UNAVAILABLE: &str = "Unavailable";

/// Answers a question with a single word.
///
/// Implementations never fail: upstream problems are absorbed and logged,
/// and some word is always returned.
#[async_trait]
pub trait TextOracle: Send + Sync {
    /// Returns a one-word answer to `question`.
    async fn ask(&self, question: &str) -> String;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Extracts the first whitespace-separated token of `text`.
///
/// Surrounding ASCII punctuation is stripped unless that would leave
/// nothing. Returns `None` when `text` is blank.
pub fn first_word(text: &str) -> Option<String> {
    let token = text.split_whitespace().next()?;
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.is_empty() {
        Some(token.to_string())
    } else {
        Some(stripped.to_string())
    }
}
