//! Focused summarization.

use crate::join_context;

/// Summarize the context, optionally steering toward a focus area.
pub fn build_summary_prompt(context_chunks: &[String], focus: Option<&str>) -> String {
    let context = join_context(context_chunks);
    let focus_part = focus
        .map(|f| format!("\nFocus the summary on: {f}\n"))
        .unwrap_or_default();
    format!(
        "You are a helpful assistant. Write a concise, well-structured summary using ONLY the context below.\n\
         If the context is insufficient, say: \"I don't have enough information to summarize.\"\n\
         {focus_part}\n\
         Context:\n\
         {context}\n\
         \n\
         Summary:"
    )
}
