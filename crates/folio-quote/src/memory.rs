//! In-memory quote source for testing and offline development

use crate::{QuoteError, QuoteSource, Result, UpstreamReply};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
enum Script {
    Reply(UpstreamReply),
    Fault(String),
}

/// A quote source that answers every call with the same scripted outcome
#[derive(Clone, Debug)]
pub struct MemoryQuoteSource {
    script: Script,
    calls: Arc<AtomicUsize>,
}

impl MemoryQuoteSource {
    /// Answer every call with the given reply
    pub fn replying(reply: UpstreamReply) -> Self {
        Self {
            script: Script::Reply(reply),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer every call with `200` and the given JSON body
    pub fn with_json(body: &serde_json::Value) -> Self {
        Self::replying(UpstreamReply::new(200, body.to_string()))
    }

    /// Fail every call as if the connection could not be made
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Script::Fault(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `fetch_random` has been called
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for MemoryQuoteSource {
    async fn fetch_random(&self) -> Result<UpstreamReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fault(message) => Err(QuoteError::Transport(message.clone())),
        }
    }
}
