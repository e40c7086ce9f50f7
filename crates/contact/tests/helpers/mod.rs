use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use folio_contact::{Draft, SubmissionError, Submitter};
use tokio::net::TcpListener;
use url::Url;

#[allow(dead_code)]
pub fn complete_draft() -> Draft {
    Draft::new("Ann", "a@b.com", "Hi", "Hello")
}

/// Submitter double that replays scripted outcomes and counts calls.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedSubmitter {
    calls: AtomicUsize,
    outcomes: Mutex<Vec<Result<(), SubmissionError>>>,
    sent: Mutex<Vec<Draft>>,
}

#[allow(dead_code)]
impl ScriptedSubmitter {
    /// Outcomes are consumed in order; once exhausted every call succeeds.
    pub fn new(outcomes: impl IntoIterator<Item = Result<(), SubmissionError>>) -> Self {
        let mut outcomes = outcomes.into_iter().collect::<Vec<_>>();
        outcomes.reverse();

        Self {
            outcomes: Mutex::new(outcomes),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Draft> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Submitter for ScriptedSubmitter {
    async fn send(&self, draft: &Draft) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(draft.clone());

        self.outcomes.lock().unwrap().pop().unwrap_or(Ok(()))
    }
}

/// Submitter that never answers.
#[allow(dead_code)]
pub struct StalledSubmitter;

#[async_trait]
impl Submitter for StalledSubmitter {
    async fn send(&self, _draft: &Draft) -> Result<(), SubmissionError> {
        std::future::pending::<Result<(), SubmissionError>>().await
    }
}

#[allow(dead_code)]
#[derive(Clone, Debug)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Received>>>,
}

/// Contact endpoint served by axum on an ephemeral port.
pub struct MockEndpoint {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

#[allow(dead_code)]
impl MockEndpoint {
    /// Answers every POST with `status` and `body` as `application/json`.
    pub async fn start(status: u16, body: impl Into<String>) -> anyhow::Result<Self> {
        let received = Arc::new(Mutex::new(vec![]));
        let state = MockState {
            status: StatusCode::from_u16(status)?,
            body: body.into(),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/api/contact", post(handle_contact))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, received })
    }

    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/api/contact", self.addr)).unwrap()
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle_contact(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    state
        .received
        .lock()
        .unwrap()
        .push(Received { content_type, body });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Address that refuses connections.
#[allow(dead_code)]
pub async fn closed_endpoint() -> anyhow::Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(Url::parse(&format!("http://{addr}/api/contact"))?)
}
