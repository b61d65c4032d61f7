//! Variant selection: offline template or external completion call.

use std::sync::Arc;

use tracing::debug;

use crate::completion::{CompletionClient, CompletionError, CompletionRequest, Message};
use crate::intake::PlanRequest;

use super::local;
use super::prompt::{DRAFT_MAX_TOKENS, DRAFT_TEMPERATURE, SYSTEM_INSTRUCTION, build_draft_prompt};

/// Substituted when the provider returns no text. A presentation fallback,
/// not an error.
pub const EMPTY_COMPLETION_FALLBACK: &str = "Unable to generate a summary at this time.";

/// Produces draft summaries from normalized plan requests.
///
/// Holds an optional completion client; without one, every draft uses the
/// deterministic offline template. Cloning is cheap (the client is shared),
/// so the service can live in router state.
#[derive(Clone, Default)]
pub struct SummaryService {
    client: Option<Arc<dyn CompletionClient>>,
}

impl SummaryService {
    /// A service that always renders the offline template.
    pub fn offline() -> Self {
        Self { client: None }
    }

    /// A service that delegates to the given completion client.
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Whether the generative path is configured.
    pub fn is_generative(&self) -> bool {
        self.client.is_some()
    }

    /// Produce a draft summary for a normalized request.
    ///
    /// Single-shot: no retries, and no timeout beyond the transport
    /// default. The returned text is trimmed and used verbatim; an empty
    /// completion yields [`EMPTY_COMPLETION_FALLBACK`].
    pub async fn draft(&self, request: &PlanRequest) -> Result<String, CompletionError> {
        let Some(client) = &self.client else {
            debug!("draft: no completion client, rendering offline template");
            return Ok(local::render(request));
        };

        debug!(provider = client.name(), "draft: calling completion client");
        let completion = client
            .complete(CompletionRequest {
                system_prompt: SYSTEM_INSTRUCTION.to_string(),
                messages: vec![Message::user(build_draft_prompt(request))],
                temperature: DRAFT_TEMPERATURE,
                max_tokens: DRAFT_MAX_TOKENS,
            })
            .await?;

        let summary = completion
            .content
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string());

        Ok(summary)
    }
}
