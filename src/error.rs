use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `nexus-exec`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum NexusError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Session ─────────────────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("failed to save config: {0}")]
    Save(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

/// The mediator surfaces exactly one kind to its callers:
/// [`LlmError::Generation`]. Transport failures, API refusals, and
/// schema-parse failures all collapse into it; the underlying cause is
/// logged, not typed.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("response generation failed: {0}")]
    Generation(String),
}

// ─── Session errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a request is already in flight for this session")]
    InFlight,
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, NexusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = NexusError::Config(ConfigError::Load("bad toml".into()));
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn generation_error_is_uniform() {
        let err = NexusError::Llm(LlmError::Generation("status 503".into()));
        assert!(err.to_string().contains("response generation failed"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let nexus_err: NexusError = anyhow_err.into();
        assert!(nexus_err.to_string().contains("something went wrong"));
    }

    #[test]
    fn in_flight_displays_correctly() {
        let err = NexusError::Session(SessionError::InFlight);
        assert!(err.to_string().contains("in flight"));
    }
}
