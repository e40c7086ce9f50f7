use strum::AsRefStr;

use crate::Error;

pub const DELIVERED_TITLE: &str = "Message Delivered";
pub const DELIVERED_MESSAGE: &str =
    "Your correspondence has been received and will be attended to with the utmost care.";

#[derive(AsRefStr, Default, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Dismissible error shown over the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl From<&Error> for Notice {
    fn from(value: &Error) -> Self {
        let title = match value {
            Error::IncompleteForm(_) => "Incomplete Form",
            _ => "Error Sending Message",
        };

        Self {
            title: title.to_owned(),
            message: value.to_string(),
        }
    }
}
