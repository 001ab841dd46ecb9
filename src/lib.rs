#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod mediator;
pub mod session;
pub mod transcript;
pub mod ui;

pub use config::Config;
pub use error::{ConfigError, LlmError, NexusError, Result, SessionError};
pub use mediator::ResponseMediator;
pub use session::{ChatSession, SubmitOutcome};
pub use transcript::{Message, MessageContent, MessageRole, StructuredReply, Transcript};
