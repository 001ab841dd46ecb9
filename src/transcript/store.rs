use super::types::{Message, StructuredReply};

/// Ordered, append-only message log for one session.
///
/// All mutation is sequential relative to the CLI event loop; `&mut self`
/// makes overlapping writes unrepresentable, so no locking is needed.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to the end. Never reorders or deduplicates.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Appends an assistant entry. Taking a [`StructuredReply`] here is what
    /// keeps the transcript invariant: assistant content is always a valid
    /// reply, fallback included.
    pub fn append_assistant(&mut self, reply: StructuredReply) -> &Message {
        self.messages.push(Message::assistant(reply));
        self.messages
            .last()
            .unwrap_or_else(|| unreachable!("push above guarantees a last element"))
    }

    /// Empties the transcript. Idempotent; clearing while a request is in
    /// flight is harmless, the eventual reply appends to the cleared log.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
