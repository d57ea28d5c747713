//! README generation.
//!
//! Turns a [`RepositoryContext`] into README content with a single call to a
//! [`TextGenerator`]. Every failure comes back as a [`GenerationError`]; nothing
//! here panics or writes to disk.

pub mod prompt;

use crate::context::RepositoryContext;
use crate::error::GenerationError;
use crate::provider::{ApiKey, TextGenerator};
use tracing::{info, warn};

pub use prompt::{build_prompt, normalize_response};

/// Outcome of one generation run: README content, or the reason it failed.
pub type GenerationResult = Result<String, GenerationError>;

/// Generates README content from repository context.
pub struct ReadmeGenerator {
    client: Box<dyn TextGenerator>,
    credential_variable: String,
}

impl ReadmeGenerator {
    /// `credential_variable` names where the credential comes from; it only
    /// appears in the missing-credential error.
    pub fn new(client: Box<dyn TextGenerator>, credential_variable: impl Into<String>) -> Self {
        Self {
            client,
            credential_variable: credential_variable.into(),
        }
    }

    /// Provider and model label for progress output, e.g. `gemini (gemini-2.5-flash)`.
    pub fn describe(&self) -> String {
        format!(
            "{} ({})",
            self.client.provider_name(),
            self.client.model_name()
        )
    }

    /// Generate README content.
    ///
    /// Without a credential this returns `CredentialMissing` and makes no call.
    /// Otherwise it makes exactly one call and normalizes the reply; an empty
    /// reply counts as a service failure.
    pub async fn generate(
        &self,
        context: &RepositoryContext,
        credential: Option<&ApiKey>,
    ) -> GenerationResult {
        let Some(credential) = credential else {
            warn!(variable = %self.credential_variable, "No credential; skipping provider call");
            return Err(GenerationError::CredentialMissing {
                variable: self.credential_variable.clone(),
            });
        };

        let prompt = build_prompt(context);
        info!(
            provider = self.client.provider_name(),
            model = self.client.model_name(),
            prompt_bytes = prompt.len(),
            "Requesting README content"
        );

        let raw = match self.client.generate(credential, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "README generation failed");
                return Err(e);
            }
        };

        let content = normalize_response(&raw);
        if content.is_empty() {
            warn!("Provider returned an empty document");
            return Err(GenerationError::Service {
                status: 200,
                message: "Provider returned an empty document".to_string(),
            });
        }

        info!(bytes = content.len(), "README content generated");
        Ok(content)
    }
}
