//! Quiz generation.

use crate::join_context;

/// Generate a multiple-choice quiz from the context.
pub fn build_quiz_prompt(
    context_chunks: &[String],
    focus: Option<&str>,
    num_questions: usize,
) -> String {
    let context = join_context(context_chunks);
    let focus_part = focus
        .map(|f| format!("\nFocus the quiz on: {f}\n"))
        .unwrap_or_default();
    format!(
        "You are a helpful tutor. Using ONLY the context below, generate {num_questions} quiz questions.\n\
         - Prefer multiple-choice questions (MCQs) with 4 options each.\n\
         - Mark the correct answer for each question.\n\
         - If the context is insufficient, say: \"I don't have enough information to generate a quiz.\"\n\
         {focus_part}\n\
         Context:\n\
         {context}\n\
         \n\
         Output format:\n\
         1) Question\n\
         A) Option\n\
         B) Option\n\
         C) Option\n\
         D) Option\n\
         Correct: <letter>\n\
         \n\
         Quiz:"
    )
}
