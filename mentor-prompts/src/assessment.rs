//! Test-mode prompts: question generation and answer grading.

use crate::join_context;

/// Generate one challenging but fair question from the context.
pub fn build_question_prompt(context_chunks: &[String], focus: Option<&str>) -> String {
    let context = join_context(context_chunks);
    let focus_part = focus
        .map(|f| format!("\nFocus on: {f}\n"))
        .unwrap_or_default();
    format!(
        "You are a tutor. Using ONLY the context below, generate ONE challenging but fair question.\n\
         - The question should be answerable from the context.\n\
         - Do NOT include the answer.\n\
         - If the context is insufficient, say: \"I don't have enough information to generate a question.\"\n\
         {focus_part}\n\
         Context:\n\
         {context}\n\
         \n\
         Question:"
    )
}

/// Grade a student answer against the context. The verdict vocabulary
/// (Correct / Partially Correct / Incorrect) is what outcome
/// classification parses, so keep it stable.
pub fn build_grader_prompt(
    context_chunks: &[String],
    question: &str,
    user_answer: &str,
) -> String {
    let context = join_context(context_chunks);
    format!(
        "You are a strict but fair tutor. Grade the student's answer using ONLY the context below.\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Question:\n\
         {question}\n\
         \n\
         Student Answer:\n\
         {user_answer}\n\
         \n\
         Instructions:\n\
         - Say whether the answer is Correct, Partially Correct, or Incorrect.\n\
         - Briefly explain why.\n\
         - Provide the correct answer if needed."
    )
}
