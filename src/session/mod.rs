//! Chat session: the caller side of the mediator contract.
//!
//! Owns the transcript and the mediator, gates submissions to one in-flight
//! request, and applies the fallback policy so the transcript invariant
//! (assistant content is always a valid reply) holds even under total
//! external failure.

use crate::error::SessionError;
use crate::mediator::ResponseMediator;
use crate::transcript::{Message, StructuredReply, Transcript};

pub struct ChatSession {
    transcript: Transcript,
    mediator: ResponseMediator,
    in_flight: bool,
}

/// Clears the in-flight flag when the submission completes or is dropped.
struct InFlightReset<'a>(&'a mut bool);

impl Drop for InFlightReset<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// What a submission attempt did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty or whitespace-only; nothing was submitted.
    Ignored,
    /// A reply (parsed or fallback) was appended.
    Replied,
}

impl ChatSession {
    pub fn new(mediator: ResponseMediator) -> Self {
        Self {
            transcript: Transcript::new(),
            mediator,
            in_flight: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn mediator(&self) -> &ResponseMediator {
        &self.mediator
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Starts a new session by clearing the transcript. Does not cancel an
    /// outstanding request; its eventual reply appends to the cleared
    /// transcript, which is acceptable.
    pub fn new_session(&mut self) {
        self.transcript.clear();
    }

    /// Submits one user input end to end.
    ///
    /// Empty or whitespace-only input never reaches the mediator and leaves
    /// the transcript unchanged. Otherwise the trimmed text is appended as a
    /// user message, the mediator is called once, and either the parsed
    /// reply or [`StructuredReply::aborted`] is appended; a mediator
    /// failure never propagates past this method.
    ///
    /// # Errors
    ///
    /// [`SessionError::InFlight`] if a prior submission is still
    /// outstanding. Queuing is not supported; the `&mut self` borrow makes
    /// this unreachable from a sequential caller, and the flag covers
    /// re-entry through shared handles.
    pub async fn handle_input(&mut self, input: &str) -> Result<SubmitOutcome, SessionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }
        if self.in_flight {
            return Err(SessionError::InFlight);
        }

        self.transcript.append(Message::user(trimmed));

        self.in_flight = true;
        let result = {
            // Reset on drop, so a submission cancelled at the await point
            // (a shared-handle caller racing it in a select) releases the
            // gate instead of wedging the session.
            let _reset = InFlightReset(&mut self.in_flight);
            self.mediator.submit(trimmed).await
        };

        let reply = result.unwrap_or_else(|_| StructuredReply::aborted());
        self.transcript.append_assistant(reply);

        Ok(SubmitOutcome::Replied)
    }

    /// The reply appended by the most recent submission, if any.
    pub fn last_reply(&self) -> Option<&StructuredReply> {
        self.transcript.last().and_then(Message::structured_reply)
    }
}
