use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("endpoint URL is empty")]
    EmptyEndpoint,
    #[error("locale is empty")]
    EmptyLocale,
    #[error("greeting is empty")]
    EmptyGreeting,
    #[error("error reply is empty")]
    EmptyErrorReply,
}

/// Widget configuration. One instance covers a whole session; nothing here
/// changes while the widget is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Question-answering endpoint, full URL.
    pub endpoint_url: String,

    /// Locale for both speech capture and voiced playback.
    pub locale: String,

    /// Bot turn appended once per open.
    pub greeting: String,

    /// Bot turn appended when a submission fails, whatever the cause.
    pub error_reply: String,

    /// Delay between the widget opening and the greeting appearing.
    /// Presentation detail; the greeting itself is not optional.
    pub greeting_delay_ms: u64,

    /// Visible labels of the suggestion shortcuts.
    pub suggestions: Vec<String>,

    /// Render endpoint answers as raw markup instead of stripping tags.
    /// Only safe against a fully trusted first-party endpoint.
    #[serde(default)]
    pub trust_answer_markup: bool,
}

impl WidgetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint_url.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::EmptyLocale);
        }
        if self.greeting.trim().is_empty() {
            return Err(ConfigError::EmptyGreeting);
        }
        if self.error_reply.trim().is_empty() {
            return Err(ConfigError::EmptyErrorReply);
        }
        Ok(())
    }
}
