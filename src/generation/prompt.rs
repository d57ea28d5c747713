//! Prompt assembly and response clean-up for README generation.

use crate::context::RepositoryContext;

const PREAMBLE: &str = "You are an expert GitHub documentation writer. Your task is to generate a detailed \
and professional README.md file in Markdown format for the following repository. \
Analyze the structure and snippets provided to determine the project's language, purpose, \
and necessary setup steps. Do not include a 'Contributing' or 'License' section \
as they are already handled by GitHub. Focus on a strong title, a clear overview, \
and practical usage instructions. The generated README should replace the existing one.";

/// Opening delimiter around the repository context.
pub const CONTEXT_START_MARKER: &str = "--- REPOSITORY CONTEXT ---";

/// Closing delimiter around the repository context.
pub const CONTEXT_END_MARKER: &str = "--------------------------";

const CLOSING_INSTRUCTION: &str = "Generate the full Markdown content for the new README.md now:";

const FENCE_OPEN: &str = "```markdown";
const FENCE_CLOSE: &str = "```";

/// Wrap the repository context in the fixed instruction text.
pub fn build_prompt(context: &RepositoryContext) -> String {
    format!(
        "{PREAMBLE}\n\n{CONTEXT_START_MARKER}\n{}\n{CONTEXT_END_MARKER}\n\n{CLOSING_INSTRUCTION}",
        context.as_str()
    )
}

/// Trim the model output and strip a surrounding ```` ```markdown ```` fence.
///
/// Only the exact opening marker is recognised; text fenced any other way is
/// returned trimmed but otherwise as-is.
pub fn normalize_response(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(FENCE_OPEN)
        .and_then(|rest| rest.strip_suffix(FENCE_CLOSE))
        .map(str::trim)
        .unwrap_or(trimmed)
        .to_string()
}
