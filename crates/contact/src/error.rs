pub const REJECTED_FALLBACK: &str = "Failed to send message";
pub const TRANSPORT_FALLBACK: &str =
    "There was a problem sending your message. Please try again later.";

/// Failure reported by the contact endpoint or the transport underneath it.
///
/// The display text is the reason shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("{reason}")]
    Rejected { status: u16, reason: String },

    #[error("{0}")]
    Transport(String),
}

impl SubmissionError {
    /// Non-2xx response; `message` is the body's `message` field, if any.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let reason = message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK.to_owned());

        Self::Rejected { status, reason }
    }

    /// No response was received.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Transport(TRANSPORT_FALLBACK.to_owned());
        }

        Self::Transport(message)
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Rejected { reason, .. } => reason,
            Self::Transport(reason) => reason,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please fill in all required fields before submitting.")]
    IncompleteForm(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Submission(#[from] SubmissionError),

    #[error("message already delivered")]
    Delivered,
}

pub type Result<T> = std::result::Result<T, Error>;
