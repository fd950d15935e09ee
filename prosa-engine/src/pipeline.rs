use std::sync::Arc;

use prosa_core::text::strip_markup;

use crate::traits::AnswerProvider;

/// Result of one question/answer exchange. Never an error: transport
/// failures, bad statuses, and undecodable bodies all collapse into
/// `Failure`, which the controller renders as the one fixed error reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    Answer(String),
    Failure,
}

/// The network leg of the submission pipeline: dispatch the question, shape
/// the reply for rendering.
pub struct AskPipeline {
    provider: Arc<dyn AnswerProvider>,
    endpoint_url: String,
    trust_answer_markup: bool,
}

impl AskPipeline {
    pub fn new(
        provider: Arc<dyn AnswerProvider>,
        endpoint_url: impl Into<String>,
        trust_answer_markup: bool,
    ) -> Self {
        Self {
            provider,
            endpoint_url: endpoint_url.into(),
            trust_answer_markup,
        }
    }

    pub async fn ask(&self, question: &str) -> BotReply {
        match self.provider.ask(&self.endpoint_url, question).await {
            Ok(answer) => {
                let text = if self.trust_answer_markup {
                    answer.text
                } else {
                    strip_markup(&answer.text)
                };
                BotReply::Answer(text)
            }
            Err(e) => {
                log::error!("ask request failed: {e:#}");
                BotReply::Failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Answer;
    use async_trait::async_trait;

    struct CannedAnswers {
        text: String,
    }

    #[async_trait]
    impl AnswerProvider for CannedAnswers {
        async fn ask(&self, _endpoint_url: &str, _question: &str) -> anyhow::Result<Answer> {
            Ok(Answer {
                text: self.text.clone(),
            })
        }
    }

    struct Unreachable;

    #[async_trait]
    impl AnswerProvider for Unreachable {
        async fn ask(&self, _endpoint_url: &str, _question: &str) -> anyhow::Result<Answer> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn answers_are_stripped_by_default() {
        let pipeline = AskPipeline::new(
            Arc::new(CannedAnswers {
                text: "Veja <b>cursos</b>".into(),
            }),
            "http://127.0.0.1:5000/ask",
            false,
        );
        assert_eq!(
            pipeline.ask("Quais cursos existem?").await,
            BotReply::Answer("Veja cursos".into())
        );
    }

    #[tokio::test]
    async fn trusted_markup_passes_through() {
        let pipeline = AskPipeline::new(
            Arc::new(CannedAnswers {
                text: "Veja <b>cursos</b>".into(),
            }),
            "http://127.0.0.1:5000/ask",
            true,
        );
        assert_eq!(
            pipeline.ask("Quais cursos existem?").await,
            BotReply::Answer("Veja <b>cursos</b>".into())
        );
    }

    #[tokio::test]
    async fn provider_failure_collapses_to_failure() {
        let pipeline = AskPipeline::new(Arc::new(Unreachable), "http://127.0.0.1:1/ask", false);
        assert_eq!(pipeline.ask("oi").await, BotReply::Failure);
    }
}
