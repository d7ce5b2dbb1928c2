//! Local keyword heuristic used when no upstream service is available.

use async_trait::async_trait;

use crate::oracle::{TextOracle, UNKNOWN};

/// Substring cues, checked in order. Every cue word must appear.
const CUES: &[(&[&str], &str)] = &[
    (&["capital", "maharashtra"], "Mumbai"),
    (&["capital", "india"], "Delhi"),
];

/// Answers from a fixed table of lowercase substring cues.
#[derive(Debug, Clone)]
pub struct HeuristicOracle {
    default_answer: &'static str,
}

impl HeuristicOracle {
    /// Creates a heuristic that answers `Unknown` when no cue matches.
    pub fn new() -> Self {
        Self::with_default(UNKNOWN)
    }

    /// Creates a heuristic with a custom no-match answer.
    pub fn with_default(default_answer: &'static str) -> Self {
        Self { default_answer }
    }

    /// Synchronous form of [`TextOracle::ask`].
    pub fn answer(&self, question: &str) -> &'static str {
        let question = question.to_lowercase();
        CUES.iter()
            .find(|(words, _)| words.iter().all(|w| question.contains(w)))
            .map_or(self.default_answer, |(_, answer)| *answer)
    }
}

impl Default for HeuristicOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextOracle for HeuristicOracle {
    async fn ask(&self, question: &str) -> String {
        self.answer(question).to_string()
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::UNAVAILABLE;

    #[test]
    fn capital_of_india() {
        assert_eq!(HeuristicOracle::new().answer("What is the capital of India?"), "Delhi");
    }

    #[test]
    fn maharashtra_wins_over_india() {
        let q = "What is the CAPITAL of Maharashtra, India?";
        assert_eq!(HeuristicOracle::new().answer(q), "Mumbai");
    }

    #[test]
    fn capital_cue_required() {
        assert_eq!(HeuristicOracle::new().answer("Where is India?"), UNKNOWN);
    }

    #[test]
    fn custom_default() {
        let oracle = HeuristicOracle::with_default(UNAVAILABLE);
        assert_eq!(oracle.answer("meaning of life"), "Unavailable");
    }

    #[tokio::test]
    async fn ask_matches_answer() {
        let oracle = HeuristicOracle::default();
        assert_eq!(oracle.ask("capital of india").await, "Delhi");
        assert_eq!(oracle.name(), "heuristic");
    }
}
