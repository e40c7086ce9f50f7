use std::error::Error;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Deserialize;
use url::Url;

use crate::{Draft, SubmissionError};

/// Delivers a draft to wherever contact messages go.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn send(&self, draft: &Draft) -> Result<(), SubmissionError>;
}

/// Error text without the endpoint URL, followed by its root cause.
fn transport_reason(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut reason = err.to_string();

    let mut cause: Option<&dyn Error> = err.source();
    let mut root = None;
    while let Some(current) = cause {
        root = Some(current);
        cause = current.source();
    }

    if let Some(root) = root {
        reason.push_str(": ");
        reason.push_str(&root.to_string());
    }

    reason
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Posts drafts as JSON to the contact endpoint.
///
/// One request per call. Timeouts are whatever the underlying client does by
/// default, which for `reqwest` means none.
#[derive(Clone)]
pub struct HttpSubmitter {
    client: Client,
    endpoint: Url,
}

impl HttpSubmitter {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: Url, client: Client) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, draft: &Draft) -> Result<(), SubmissionError> {
        tracing::info!("Sending contact message");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(draft)
            .send()
            .await
            .map_err(|e| SubmissionError::transport(transport_reason(e)))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Contact message accepted");
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        tracing::warn!(status = status.as_u16(), ?message, "Contact endpoint rejected message");

        Err(SubmissionError::rejected(status.as_u16(), message))
    }
}
