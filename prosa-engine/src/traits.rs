use async_trait::async_trait;
use prosa_core::types::Turn;

/// Raw reply from the question-answering endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Sends one question and returns the endpoint's answer. Implementations
    /// must fail on transport errors, non-success statuses, and undecodable
    /// bodies alike; the pipeline does not distinguish among them.
    async fn ask(&self, endpoint_url: &str, question: &str) -> anyhow::Result<Answer>;
}

/// Single-shot speech capture. One call captures one utterance and returns
/// its best-confidence transcript, or `None` when capture ended without
/// recognizable speech. No interim transcripts are surfaced.
#[async_trait]
pub trait RecognizerBackend: Send + Sync {
    async fn recognize_once(&self, locale: &str) -> anyhow::Result<Option<String>>;
}

/// Fire-and-forget voiced playback with a cancel-all operation. No queueing
/// contract beyond whatever the backend provides.
#[async_trait]
pub trait SynthesizerBackend: Send + Sync {
    async fn speak(&self, text: &str, locale: &str) -> anyhow::Result<()>;
    async fn stop(&self) -> anyhow::Result<()>;
}

/// Visual log of the conversation. Render runs under the controller lock
/// and must not block on I/O.
pub trait TranscriptView: Send + Sync {
    /// Appends an entry for `turn` and keeps the latest entry visible.
    fn render(&self, turn: &Turn);

    /// Discards all rendered entries, with no transition.
    fn reset(&self);
}
