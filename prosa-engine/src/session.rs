use serde::{Deserialize, Serialize};

/// Widget visibility. Transitions only through explicit open/close actions
/// on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Closed,
    Open,
}

/// Why a submission was dropped before any turn was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    EmptyInput,
    SessionClosed,
    MicUnavailable,
    NoSpeech,
}

/// Result of one pass through the submission pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Input dropped before any turn was created; nothing was sent.
    Ignored(IgnoreReason),

    /// The endpoint answered. The transcript gained one user turn and one
    /// bot turn, and the answer was forwarded to speech output.
    Answered { question: String, answer: String },

    /// The request failed (transport, status, or decode). The transcript
    /// gained one user turn and the fixed error reply; nothing was spoken.
    /// Terminal for this submission, no retry.
    Failed { question: String },

    /// The session changed while the request was in flight; the result was
    /// discarded without touching the current transcript.
    Discarded { question: String },
}

/// Snapshot for embedding UIs (recording indicator, mic visibility).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetStatus {
    pub state: SessionState,
    pub turn_count: usize,
    pub is_recording: bool,
    pub mic_available: bool,
    pub speech_available: bool,
}
