use validator::Validate;

use crate::{
    Draft, Error, Field, Notice, Result, SubmissionError, SubmissionState, Submitter,
    error::TRANSPORT_FALLBACK,
};

/// Owns the form draft and drives one submission at a time.
pub struct FormController<S> {
    submitter: S,
    draft: Draft,
    state: SubmissionState,
    notice: Option<Notice>,
}

impl<S: Submitter> FormController<S> {
    pub fn new(submitter: S) -> Self {
        Self::with_draft(submitter, Draft::default())
    }

    pub fn with_draft(submitter: S, draft: Draft) -> Self {
        Self {
            submitter,
            draft,
            state: SubmissionState::Idle,
            notice: None,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Validates the draft and, if complete, hands it to the submitter.
    ///
    /// Any error is also kept as the current [`Notice`] until [`dismiss`]
    /// is called. The draft survives failures and is cleared on success.
    ///
    /// [`dismiss`]: FormController::dismiss
    pub async fn submit(&mut self) -> Result<()> {
        let result = self.try_submit().await;

        if let Err(err) = &result {
            self.notice = Some(Notice::from(err));
        }

        result
    }

    /// Closes the notice. A failed submission goes back to idle with the
    /// draft untouched so it can be sent again.
    pub fn dismiss(&mut self) {
        self.notice = None;

        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Idle;
        }
    }

    async fn try_submit(&mut self) -> Result<()> {
        match self.state {
            SubmissionState::Succeeded => return Err(Error::Delivered),
            SubmissionState::Failed(_) => self.state = SubmissionState::Idle,
            SubmissionState::Idle | SubmissionState::Submitting => {}
        }

        if let Err(errors) = self.draft.validate() {
            tracing::warn!(missing = ?self.draft.missing_fields(), "Incomplete contact form");

            return Err(Error::IncompleteForm(errors));
        }

        self.notice = None;

        let Self {
            submitter,
            draft,
            state,
            notice,
        } = self;

        let in_flight = InFlight::begin(state, notice);

        match submitter.send(draft).await {
            Ok(()) => {
                in_flight.settle(SubmissionState::Succeeded);
                *draft = Draft::default();

                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    reason = err.reason(),
                    message_len = draft.message.len(),
                    "Error sending contact message"
                );
                tracing::debug!(
                    name = %draft.name,
                    email = %draft.email,
                    subject = %draft.subject,
                    body = %draft.message,
                    "Unsent contact message"
                );

                in_flight.settle(SubmissionState::Failed(err.reason().to_owned()));

                Err(err.into())
            }
        }
    }
}

/// Holds the state in `Submitting` for as long as a send is outstanding.
///
/// If the send never settles (the future is dropped or unwinds), the state
/// is moved to `Failed` on drop instead of staying `Submitting`, with a
/// notice the visitor can dismiss.
struct InFlight<'a> {
    state: &'a mut SubmissionState,
    notice: &'a mut Option<Notice>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a mut SubmissionState, notice: &'a mut Option<Notice>) -> Self {
        *state = SubmissionState::Submitting;

        Self {
            state,
            notice,
            settled: false,
        }
    }

    fn settle(mut self, outcome: SubmissionState) {
        *self.state = outcome;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let err = Error::Submission(SubmissionError::transport(""));

            *self.notice = Some(Notice::from(&err));
            *self.state = SubmissionState::Failed(TRANSPORT_FALLBACK.to_owned());
        }
    }
}
