//! Grounded question answering.

use crate::join_context;

/// Answer strictly from the provided context; admit ignorance
/// otherwise.
pub fn build_answer_prompt(context_chunks: &[String], question: &str) -> String {
    let context = join_context(context_chunks);
    format!(
        "You are a helpful assistant. Answer the question using ONLY the context below.\n\
         If the answer is not in the context, say: \"I don't know based on the provided content.\"\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Question:\n\
         {question}\n\
         \n\
         Answer:"
    )
}
