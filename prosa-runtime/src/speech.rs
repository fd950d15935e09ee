use std::collections::VecDeque;

use tokio::sync::Mutex;

use prosa_engine::traits::{RecognizerBackend, SynthesizerBackend};

/// Deterministic recognizer for demos and tests: each capture pops the
/// next scripted utterance; an empty queue is a no-speech capture.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    utterances: Mutex<VecDeque<String>>,
}

impl ScriptedRecognizer {
    pub fn new(utterances: impl IntoIterator<Item = String>) -> Self {
        Self {
            utterances: Mutex::new(utterances.into_iter().collect()),
        }
    }

    pub async fn push(&self, utterance: impl Into<String>) {
        self.utterances.lock().await.push_back(utterance.into());
    }
}

#[async_trait::async_trait]
impl RecognizerBackend for ScriptedRecognizer {
    async fn recognize_once(&self, _locale: &str) -> anyhow::Result<Option<String>> {
        Ok(self.utterances.lock().await.pop_front())
    }
}

/// Prints utterances instead of voicing them. `stop` is a no-op: there is
/// no queue to cancel.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSynthesizer;

#[async_trait::async_trait]
impl SynthesizerBackend for ConsoleSynthesizer {
    async fn speak(&self, text: &str, locale: &str) -> anyhow::Result<()> {
        println!("[fala:{locale}] {text}");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_recognizer_pops_in_order_then_runs_dry() {
        let recognizer = ScriptedRecognizer::new(["um".to_string(), "dois".to_string()]);

        assert_eq!(
            recognizer.recognize_once("pt-BR").await.unwrap(),
            Some("um".to_string())
        );
        assert_eq!(
            recognizer.recognize_once("pt-BR").await.unwrap(),
            Some("dois".to_string())
        );
        assert_eq!(recognizer.recognize_once("pt-BR").await.unwrap(), None);

        recognizer.push("três").await;
        assert_eq!(
            recognizer.recognize_once("pt-BR").await.unwrap(),
            Some("três".to_string())
        );
    }
}
