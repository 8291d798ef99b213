use crate::errors::MentorResult;

/// Chat model collaborator: answers, summaries, quiz generation, and
/// grading all go through this seam with prompts built by
/// `mentor-prompts`.
pub trait ILanguageModel: Send + Sync {
    /// Complete a single prompt and return the raw model text.
    fn complete(&self, prompt: &str) -> MentorResult<String>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
