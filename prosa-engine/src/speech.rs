use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::{RecognizerBackend, SynthesizerBackend};

/// Speech-to-text adapter. Owns exactly one piece of state: whether a
/// capture is in progress. Availability is decided at construction; when
/// the platform has no recognizer, the triggering control should be hidden
/// and no capture is ever attempted.
pub struct SpeechInput {
    backend: Option<Arc<dyn RecognizerBackend>>,
    locale: String,
    recording: AtomicBool,
}

impl SpeechInput {
    pub fn new(backend: Arc<dyn RecognizerBackend>, locale: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            locale: locale.into(),
            recording: AtomicBool::new(false),
        }
    }

    /// Adapter for a platform without speech recognition.
    pub fn unavailable(locale: impl Into<String>) -> Self {
        Self {
            backend: None,
            locale: locale.into(),
            recording: AtomicBool::new(false),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn is_recording(&self) -> bool {
        self.recording.load(Ordering::SeqCst)
    }

    /// Captures a single utterance and returns its transcript.
    ///
    /// Returns `None` when the capability is unavailable, a capture is
    /// already in progress, or capture ended without speech. The recording
    /// flag is cleared when capture ends regardless of outcome, so any
    /// recording indicator can follow it directly.
    pub async fn listen_once(&self) -> Option<String> {
        let backend = self.backend.as_ref()?;

        if self.recording.swap(true, Ordering::SeqCst) {
            // Single-shot capture is already running.
            return None;
        }

        let result = backend.recognize_once(&self.locale).await;
        self.recording.store(false, Ordering::SeqCst);

        match result {
            Ok(transcript) => transcript,
            Err(e) => {
                log::warn!("speech capture failed: {e}");
                None
            }
        }
    }
}

/// Text-to-speech adapter. `speak` and `stop` are silent no-ops when the
/// platform capability is unavailable; backend failures are logged and
/// contained, never surfaced to the user.
pub struct SpeechOutput {
    backend: Option<Arc<dyn SynthesizerBackend>>,
    locale: String,
}

impl SpeechOutput {
    pub fn new(backend: Arc<dyn SynthesizerBackend>, locale: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            locale: locale.into(),
        }
    }

    /// Adapter for a platform without speech synthesis.
    pub fn unavailable(locale: impl Into<String>) -> Self {
        Self {
            backend: None,
            locale: locale.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn speak(&self, text: &str) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        if let Err(e) = backend.speak(text, &self.locale).await {
            log::warn!("speech synthesis failed: {e}");
        }
    }

    pub async fn stop(&self) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        if let Err(e) = backend.stop().await {
            log::warn!("speech cancel failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedRecognizer {
        transcript: Option<String>,
    }

    #[async_trait]
    impl RecognizerBackend for FixedRecognizer {
        async fn recognize_once(&self, _locale: &str) -> anyhow::Result<Option<String>> {
            Ok(self.transcript.clone())
        }
    }

    struct FailingRecognizer;

    #[async_trait]
    impl RecognizerBackend for FailingRecognizer {
        async fn recognize_once(&self, _locale: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow::anyhow!("mic exploded"))
        }
    }

    struct MemorySynth {
        spoken: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SynthesizerBackend for MemorySynth {
        async fn speak(&self, text: &str, _locale: &str) -> anyhow::Result<()> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }

        async fn stop(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn unavailable_input_never_captures() {
        let input = SpeechInput::unavailable("pt-BR");
        assert!(!input.is_available());
        assert_eq!(input.listen_once().await, None);
        assert!(!input.is_recording());
    }

    #[tokio::test]
    async fn capture_returns_transcript_and_clears_recording() {
        let input = SpeechInput::new(
            Arc::new(FixedRecognizer {
                transcript: Some("Quais cursos existem?".into()),
            }),
            "pt-BR",
        );
        assert_eq!(
            input.listen_once().await,
            Some("Quais cursos existem?".to_string())
        );
        assert!(!input.is_recording());
    }

    #[tokio::test]
    async fn backend_failure_ends_capture_quietly() {
        let input = SpeechInput::new(Arc::new(FailingRecognizer), "pt-BR");
        assert_eq!(input.listen_once().await, None);
        assert!(!input.is_recording());
    }

    #[tokio::test]
    async fn unavailable_output_is_a_silent_noop() {
        let output = SpeechOutput::unavailable("pt-BR");
        assert!(!output.is_available());
        output.speak("Olá").await;
        output.stop().await;
    }

    #[tokio::test]
    async fn output_forwards_to_backend() {
        let synth = Arc::new(MemorySynth {
            spoken: Mutex::new(vec![]),
        });
        let output = SpeechOutput::new(synth.clone(), "pt-BR");
        output.speak("Olá").await;
        assert_eq!(*synth.spoken.lock().unwrap(), vec!["Olá".to_string()]);
    }
}
