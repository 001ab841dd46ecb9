//! Response mediator: turns a raw prompt into one structured completion
//! call and its reply into a [`StructuredReply`].
//!
//! Explicitly constructed with an injected provider, not a process-wide
//! singleton. Single-flight is the caller's responsibility (see
//! [`crate::session::ChatSession`]).

use crate::error::LlmError;
use crate::llm::{GenerationRequest, Provider, sanitize_api_error};
use crate::transcript::StructuredReply;
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Fixed instruction describing the three-phase response contract.
pub const SYSTEM_INSTRUCTION: &str = "\
You are the Nexus Executive AI assistant, operating under the \"Plan-Execute-Verify\" framework.
For every query, you must:
1. Strategic Planning: Decompose the objective into logical sub-tasks.
2. Precision Execution: Provide a high-depth, nuanced, and professionally structured response. Eliminate corporate fluff. Use technical accuracy and evidence-based reasoning.
3. Verification: Critique your own output. State limitations transparently.

IMPORTANT: You MUST return your response as a valid JSON object matching this schema:
{
  \"plan\": [\"task 1\", \"task 2\", ...],
  \"execution\": \"Markdown formatted detailed response content\",
  \"verification\": \"Critical assessment of the accuracy and limitations\"
}
Maintain an objective, professional, and empathetic tone.";

/// Declared reply schema: three named fields, all required.
pub fn response_schema() -> Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "plan": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "Steps taken to formulate the response."
            },
            "execution": {
                "type": "STRING",
                "description": "The main body of the response."
            },
            "verification": {
                "type": "STRING",
                "description": "Self-correction and limitation notice."
            }
        },
        "required": ["plan", "execution", "verification"]
    })
}

pub struct ResponseMediator {
    provider: Box<dyn Provider>,
    model: String,
    temperature: f64,
    schema: Value,
}

impl ResponseMediator {
    pub fn new(provider: Box<dyn Provider>, model: impl Into<String>, temperature: f64) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            schema: response_schema(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Issues exactly one completion call and parses the reply against the
    /// declared schema. Callers must pass a non-empty prompt and must not
    /// call again while a prior call is outstanding.
    ///
    /// # Errors
    ///
    /// Every failure (transport, remote refusal, malformed payload)
    /// surfaces as the single [`LlmError::Generation`] kind. The underlying
    /// cause goes to the log, not the type. Never returns a partial reply.
    pub async fn submit(&self, prompt: &str) -> Result<StructuredReply, LlmError> {
        let request = GenerationRequest {
            system_instruction: SYSTEM_INSTRUCTION,
            prompt,
            model: &self.model,
            temperature: self.temperature,
            response_schema: &self.schema,
        };

        let text = self
            .provider
            .generate_structured(request)
            .await
            .map_err(|cause| {
                tracing::warn!(provider = self.provider.name(), %cause, "completion call failed");
                LlmError::Generation(sanitize_api_error(&cause.to_string()))
            })?;

        serde_json::from_str::<StructuredReply>(&text).map_err(|cause| {
            tracing::warn!(%cause, "reply did not match the declared schema");
            LlmError::Generation("reply did not match the declared schema".to_string())
        })
    }
}
