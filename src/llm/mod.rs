pub mod api;
pub mod prompts;
mod provider;

pub use provider::{CompletionOptions, LlmBackend, LlmProvider};

/// Strip an optional Markdown code fence (```json ... ``` or ``` ... ```)
/// from an LLM reply before JSON parsing. Models frequently wrap JSON in
/// fences even when told not to.
pub fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening fence line, if any.
    let body = match rest.split_once('\n') {
        Some((_lang, body)) => body,
        None => return trimmed,
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}
