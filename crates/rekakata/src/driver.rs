//! Seam for the external text generation service.

use async_trait::async_trait;
use rekakata_error::RekaResult;
use serde::{Deserialize, Serialize};

/// One chat-style generation call: a system prompt, a user prompt and
/// sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Instructions describing the expected output format
    pub system_prompt: String,
    /// Idea, entities, trending elements and platform specifics
    pub user_prompt: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

/// Trait for text generation backends.
///
/// Implementations own their transport, credentials and retry policy.
/// Failures are reported as generation errors so callers can tell them
/// apart from validation failures.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use rekakata::{GenerationDriver, GenerationRequest, RekaResult};
///
/// struct Echo;
///
/// #[async_trait]
/// impl GenerationDriver for Echo {
///     async fn generate(&self, request: &GenerationRequest) -> RekaResult<String> {
///         Ok(request.user_prompt.clone())
///     }
///
///     fn model_name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for `request`.
    async fn generate(&self, request: &GenerationRequest) -> RekaResult<String>;

    /// Model identifier reported in logs and errors.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: GenerationDriver + ?Sized> GenerationDriver for Box<D> {
    async fn generate(&self, request: &GenerationRequest) -> RekaResult<String> {
        (**self).generate(request).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
