//! The `CompletionClient` trait -- the seam between summary assembly and
//! the external text-completion provider.

use async_trait::async_trait;

use super::error::CompletionError;
use super::types::{CompletionRequest, CompletionResponse};

/// Adapter interface for an external text-completion service.
///
/// Implementors wrap a concrete provider API and translate its wire format
/// into [`CompletionResponse`].
///
/// # Object Safety
///
/// The trait is object-safe so a client can be stored as
/// `Arc<dyn CompletionClient>` inside the summary service, and so tests can
/// substitute a stub.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Human-readable provider name (e.g. "openai").
    fn name(&self) -> &str;

    /// Submit a single-shot completion request.
    ///
    /// Implementations must not retry; a failure is terminal for the
    /// request that triggered it.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

// Compile-time assertion: CompletionClient must be object-safe.
// If this line compiles, the trait can be used as `dyn CompletionClient`.
const _: () = {
    fn _assert_object_safe(_: &dyn CompletionClient) {}
};

#[cfg(test)]
mod tests {
    use super::*;

    /// A trivial client that echoes the user prompt back, used only to
    /// prove the trait can be implemented and used as `dyn
    /// CompletionClient`.
    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, CompletionError> {
            Ok(CompletionResponse {
                content: request.messages.first().map(|m| m.content.clone()),
            })
        }
    }

    #[test]
    fn completion_client_is_object_safe() {
        let client: Box<dyn CompletionClient> = Box::new(EchoClient);
        assert_eq!(client.name(), "echo");
    }

    #[tokio::test]
    async fn echo_client_round_trip() {
        use super::super::types::Message;

        let client: Box<dyn CompletionClient> = Box::new(EchoClient);
        let response = client
            .complete(CompletionRequest {
                system_prompt: "system".to_string(),
                messages: vec![Message::user("hello")],
                temperature: 0.7,
                max_tokens: 100,
            })
            .await
            .unwrap();

        assert_eq!(response.content.as_deref(), Some("hello"));
    }
}
