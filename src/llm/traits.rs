use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Parameters for one structured-generation call: the raw user prompt plus
/// the fixed instruction/schema contract the remote service must honor.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub system_instruction: &'a str,
    pub prompt: &'a str,
    pub model: &'a str,
    pub temperature: f64,
    /// JSON schema the service is instructed to emit; the provider forwards
    /// it verbatim in its wire format.
    pub response_schema: &'a Value,
}

/// Completion backend seam. Object-safe (boxed futures) so sessions can hold
/// a `Box<dyn Provider>` and tests can inject stubs.
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "gemini").
    fn name(&self) -> &str;

    /// Issues exactly one completion call and returns the raw response text,
    /// which the caller parses against the declared schema. No retries.
    fn generate_structured<'a>(
        &'a self,
        request: GenerationRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;
}
