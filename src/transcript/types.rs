use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// The fixed Plan-Execute-Verify contract the completion service must
/// satisfy. `plan` may be empty; `execution` and `verification` are always
/// present. Deserialization fails otherwise, which is how the schema is
/// enforced on inbound payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReply {
    pub plan: Vec<String>,
    pub execution: String,
    pub verification: String,
}

impl StructuredReply {
    /// Fallback reply appended when response generation fails for any
    /// reason. Satisfies the full reply shape, so rendering never has to
    /// special-case errors.
    pub fn aborted() -> Self {
        Self {
            plan: vec!["Operation Aborted".to_string()],
            execution: "I encountered an error while processing your request. \
                        This is likely due to API constraints or connectivity issues."
                .to_string(),
            verification: "Self-correction: API response was not received as expected."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: String },
    Structured { reply: StructuredReply },
}

/// One transcript entry. Immutable once appended; `id` is unique per
/// transcript (uuid v4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: MessageContent,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: MessageContent::Text { text: text.into() },
            created_at: Utc::now(),
        }
    }

    /// Assistant entries always carry a structured reply; plain-text
    /// assistant content is unrepresentable.
    pub fn assistant(reply: StructuredReply) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: MessageContent::Structured { reply },
            created_at: Utc::now(),
        }
    }

    pub fn structured_reply(&self) -> Option<&StructuredReply> {
        match &self.content {
            MessageContent::Structured { reply } => Some(reply),
            MessageContent::Text { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborted_reply_satisfies_shape() {
        let reply = StructuredReply::aborted();
        assert_eq!(reply.plan, vec!["Operation Aborted".to_string()]);
        assert!(!reply.execution.is_empty());
        assert!(!reply.verification.is_empty());
    }

    #[test]
    fn reply_deserializes_from_schema_json() {
        let json = r###"{
            "plan": ["Research", "Draft"],
            "execution": "## Plan\n...",
            "verification": "Limited to Q1 data."
        }"###;
        let reply: StructuredReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.plan.len(), 2);
        assert_eq!(reply.verification, "Limited to Q1 data.");
    }

    #[test]
    fn reply_with_missing_field_is_rejected() {
        let json = r#"{"plan": [], "execution": "text"}"#;
        assert!(serde_json::from_str::<StructuredReply>(json).is_err());
    }

    #[test]
    fn reply_allows_empty_plan() {
        let json = r#"{"plan": [], "execution": "e", "verification": "v"}"#;
        let reply: StructuredReply = serde_json::from_str(json).unwrap();
        assert!(reply.plan.is_empty());
    }

    #[test]
    fn message_ids_are_unique() {
        let a = Message::user("one");
        let b = Message::user("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn assistant_message_exposes_reply() {
        let msg = Message::assistant(StructuredReply::aborted());
        assert_eq!(msg.role, MessageRole::Assistant);
        assert!(msg.structured_reply().is_some());
    }

    #[test]
    fn user_message_has_no_reply() {
        let msg = Message::user("hello");
        assert!(msg.structured_reply().is_none());
    }
}
