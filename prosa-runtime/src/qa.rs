use prosa_engine::traits::{Answer, AnswerProvider};

/// `AnswerProvider` backed by the remote question-answering endpoint.
#[derive(Debug, Clone, Default)]
pub struct HttpAnswerProvider;

impl HttpAnswerProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl AnswerProvider for HttpAnswerProvider {
    async fn ask(&self, endpoint_url: &str, question: &str) -> anyhow::Result<Answer> {
        let cfg = prosa_providers::ask::AskConfig {
            endpoint_url: endpoint_url.to_string(),
        };
        prosa_providers::ask::validate_endpoint_url(&cfg.endpoint_url)?;

        let req = prosa_providers::ask::build_ask_request(&cfg, question);
        let resp = prosa_providers::runtime::execute(&req).await?;

        if !(200..=299).contains(&resp.status) {
            return Err(anyhow::anyhow!(
                "ask request failed: status={} body={}",
                resp.status,
                String::from_utf8_lossy(&resp.body)
            ));
        }

        let text = prosa_providers::parse::parse_ask_answer(&resp.body)?;
        Ok(Answer { text })
    }
}
