pub mod store;
pub mod types;

pub use store::Transcript;
pub use types::{Message, MessageContent, MessageRole, StructuredReply};
