use serde::{Deserialize, Serialize};
use std::fmt;

/// Graded outcome of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Partial,
    Incorrect,
}

impl Outcome {
    /// Parse a free-text grader verdict.
    ///
    /// Case-folds the text, then matches substrings in priority order:
    /// "partial" first ("Partially Correct" contains "correct" and must
    /// not count as fully correct), then "incorrect" (which also
    /// contains "correct"), then bare "correct". Anything unrecognized
    /// is `Incorrect`.
    ///
    /// Substring matching on model output is fragile for unusual
    /// phrasings ("not quite correct"); the grader prompt constrains
    /// verdicts to Correct / Partially Correct / Incorrect, and this
    /// policy is kept as-is so grading behavior stays observable and
    /// stable.
    pub fn classify(grade_text: &str) -> Self {
        let graded = grade_text.to_lowercase();
        if graded.contains("partial") {
            Self::Partial
        } else if graded.contains("incorrect") {
            Self::Incorrect
        } else if graded.contains("correct") {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Stable lowercase label, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Partial => "partial",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
