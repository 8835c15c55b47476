use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use messenger_core::{GraphExecutor, GraphResponse, ResponseBody};
use messenger_domain::{HttpMethod, MessengerError, Result as DomainResult};

/// What the scripted body yields when read.
#[derive(Clone)]
pub enum BodyScript {
    Bytes(Vec<u8>),
    ReadError(MessengerError),
}

/// Response body that counts how many times it is released.
pub struct TrackedBody {
    script: BodyScript,
    releases: Arc<AtomicUsize>,
}

#[async_trait]
impl ResponseBody for TrackedBody {
    async fn read_all(self: Box<Self>) -> DomainResult<Vec<u8>> {
        match &self.script {
            BodyScript::Bytes(bytes) => Ok(bytes.clone()),
            BodyScript::ReadError(err) => Err(err.clone()),
        }
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Outcome the executor produces for every request.
#[derive(Clone)]
enum Reply {
    Respond { status: u16, body: BodyScript },
    Fail(MessengerError),
}

/// A request as seen by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub has_body: bool,
}

/// In-memory mock for `GraphExecutor`.
///
/// Replays one scripted reply for every request, records what was asked
/// for, and tracks how many response bodies were released.
pub struct ScriptedExecutor {
    reply: Reply,
    requests: Mutex<Vec<RecordedRequest>>,
    releases: Arc<AtomicUsize>,
}

impl ScriptedExecutor {
    fn with_reply(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
            releases: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Answer every request with `status` and a JSON/text body.
    pub fn respond(status: u16, body: &str) -> Arc<Self> {
        Self::with_reply(Reply::Respond {
            status,
            body: BodyScript::Bytes(body.as_bytes().to_vec()),
        })
    }

    /// Answer with `status` but fail while the body is being read.
    pub fn failing_body(status: u16, err: MessengerError) -> Arc<Self> {
        Self::with_reply(Reply::Respond { status, body: BodyScript::ReadError(err) })
    }

    /// Fail every request before any response exists.
    pub fn transport_error(err: MessengerError) -> Arc<Self> {
        Self::with_reply(Reply::Fail(err))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> String {
        self.requests().last().map(|r| r.url.clone()).expect("no request recorded")
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GraphExecutor for ScriptedExecutor {
    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> DomainResult<GraphResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            has_body: body.is_some(),
        });

        match &self.reply {
            Reply::Respond { status, body } => Ok(GraphResponse::new(
                *status,
                Box::new(TrackedBody { script: body.clone(), releases: self.releases.clone() }),
            )),
            Reply::Fail(err) => Err(err.clone()),
        }
    }
}
