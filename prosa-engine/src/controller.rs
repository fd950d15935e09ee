use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use prosa_core::config::WidgetConfig;
use prosa_core::text::normalize_question;
use prosa_core::types::{Role, Transcript};

use crate::pipeline::{AskPipeline, BotReply};
use crate::session::{IgnoreReason, SessionState, SubmitOutcome, WidgetStatus};
use crate::speech::{SpeechInput, SpeechOutput};
use crate::traits::{AnswerProvider, TranscriptView};

#[derive(Default)]
struct Inner {
    state: SessionState,
    transcript: Transcript,

    // Advanced on every open AND close. Pending work (the delayed greeting,
    // an in-flight submission) keeps the value it started under and bails
    // when the counter has moved on, so a reply from a previous session can
    // never land in a freshly reset transcript.
    generation: u64,
}

/// Owns the widget lifecycle and the transcript, and is the sole entry
/// point for the three input surfaces (typed submit, voice transcript,
/// suggestion shortcut).
pub struct WidgetController {
    cfg: WidgetConfig,
    inner: Arc<Mutex<Inner>>,
    pipeline: AskPipeline,
    view: Arc<dyn TranscriptView>,
    speech_in: SpeechInput,
    speech_out: SpeechOutput,
}

impl WidgetController {
    pub fn new(
        cfg: WidgetConfig,
        provider: Arc<dyn AnswerProvider>,
        view: Arc<dyn TranscriptView>,
        speech_in: SpeechInput,
        speech_out: SpeechOutput,
    ) -> Self {
        let pipeline = AskPipeline::new(
            provider,
            cfg.endpoint_url.clone(),
            cfg.trust_answer_markup,
        );
        Self {
            cfg,
            inner: Arc::new(Mutex::new(Inner::default())),
            pipeline,
            view,
            speech_in,
            speech_out,
        }
    }

    /// Opens the widget: resets the transcript, then greets. Exactly one
    /// greeting per open; a no-op when already open.
    pub async fn open(&self) {
        let generation = {
            let mut inner = self.inner.lock().await;
            if inner.state == SessionState::Open {
                return;
            }
            inner.state = SessionState::Open;
            inner.generation = inner.generation.wrapping_add(1);
            inner.transcript.clear();
            self.view.reset();
            log::info!("chat opened (generation {})", inner.generation);
            inner.generation
        };

        // Decouples the open animation from content appearance. The
        // generation check below keeps the greeting out of any session
        // other than the one that scheduled it.
        tokio::time::sleep(Duration::from_millis(self.cfg.greeting_delay_ms)).await;

        {
            let mut inner = self.inner.lock().await;
            if inner.generation != generation {
                return;
            }
            let turn = inner.transcript.append(Role::Bot, self.cfg.greeting.clone());
            self.view.render(turn);
        }
        self.speech_out.speak(&self.cfg.greeting).await;
    }

    /// Closes the widget and cancels any in-progress utterance. Idempotent;
    /// the transcript is kept and cleared by the next `open`.
    pub async fn close(&self) {
        {
            let mut inner = self.inner.lock().await;
            if inner.state == SessionState::Closed {
                return;
            }
            inner.state = SessionState::Closed;
            inner.generation = inner.generation.wrapping_add(1);
            log::info!("chat closed");
        }
        self.speech_out.stop().await;
    }

    /// Close trigger for activations on the background overlay. Activations
    /// inside the widget body never close the chat.
    pub async fn overlay_activated(&self, inside_widget_body: bool) {
        if !inside_widget_body {
            self.close().await;
        }
    }

    /// The submission pipeline. Single code path for all input surfaces:
    /// trim guard, user turn, question POST, then either the answer turn
    /// (also voiced) or the fixed error reply (silent).
    ///
    /// Callers owning an input control clear it on any non-`Ignored`
    /// outcome; the user turn is already on screen at that point.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let Some(question) = normalize_question(text) else {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        };

        let generation = {
            let mut inner = self.inner.lock().await;
            if inner.state != SessionState::Open {
                return SubmitOutcome::Ignored(IgnoreReason::SessionClosed);
            }
            let turn = inner.transcript.append(Role::User, question.clone());
            self.view.render(turn);
            inner.generation
        };

        let reply = self.pipeline.ask(&question).await;

        let answer = {
            let mut inner = self.inner.lock().await;
            if inner.generation != generation {
                log::info!("discarding reply from a previous session");
                return SubmitOutcome::Discarded { question };
            }
            match reply {
                BotReply::Answer(answer) => {
                    let turn = inner.transcript.append(Role::Bot, answer.clone());
                    self.view.render(turn);
                    Some(answer)
                }
                BotReply::Failure => {
                    let turn = inner
                        .transcript
                        .append(Role::Bot, self.cfg.error_reply.clone());
                    self.view.render(turn);
                    None
                }
            }
        };

        match answer {
            Some(answer) => {
                self.speech_out.speak(&answer).await;
                SubmitOutcome::Answered { question, answer }
            }
            None => SubmitOutcome::Failed { question },
        }
    }

    /// Suggestion shortcut: submits the control's visible label through the
    /// same pipeline as typed input.
    pub async fn submit_suggestion(&self, label: &str) -> SubmitOutcome {
        self.submit(label).await
    }

    /// Voice input: captures one utterance and submits its transcript
    /// through the same pipeline as typed input. Does nothing when speech
    /// recognition is unavailable.
    pub async fn listen_and_submit(&self) -> SubmitOutcome {
        if !self.speech_in.is_available() {
            return SubmitOutcome::Ignored(IgnoreReason::MicUnavailable);
        }
        match self.speech_in.listen_once().await {
            Some(transcript) => self.submit(&transcript).await,
            None => SubmitOutcome::Ignored(IgnoreReason::NoSpeech),
        }
    }

    pub async fn status(&self) -> WidgetStatus {
        let inner = self.inner.lock().await;
        WidgetStatus {
            state: inner.state,
            turn_count: inner.transcript.len(),
            is_recording: self.speech_in.is_recording(),
            mic_available: self.speech_in.is_available(),
            speech_available: self.speech_out.is_available(),
        }
    }

    /// Snapshot of the current transcript.
    pub async fn transcript(&self) -> Transcript {
        self.inner.lock().await.transcript.clone()
    }

    /// Visible labels for the suggestion shortcuts.
    pub fn suggestions(&self) -> &[String] {
        &self.cfg.suggestions
    }

    pub fn mic_available(&self) -> bool {
        self.speech_in.is_available()
    }
}
