use std::sync::Arc;

use prosa_engine::controller::WidgetController;
use prosa_engine::speech::{SpeechInput, SpeechOutput};
use prosa_runtime::defaults::default_widget_config;
use prosa_runtime::qa::HttpAnswerProvider;
use prosa_runtime::speech::{ConsoleSynthesizer, ScriptedRecognizer};
use prosa_runtime::view::StdoutTranscriptView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Demo behavior: drive one full widget session against a live endpoint.
    // Point PROSA_ASK_URL at the QA server (default: local dev server).

    let mut cfg = default_widget_config();
    if let Ok(url) = std::env::var("PROSA_ASK_URL") {
        cfg.endpoint_url = url;
    }
    if let Ok(greeting) = std::env::var("PROSA_GREETING") {
        cfg.greeting = greeting;
    }
    cfg.validate()?;

    // Scripted voice input so the demo runs without a microphone.
    let recognizer = Arc::new(ScriptedRecognizer::new([
        "Quais cursos existem?".to_string(),
    ]));

    let locale = cfg.locale.clone();
    let controller = Arc::new(WidgetController::new(
        cfg,
        Arc::new(HttpAnswerProvider::new()),
        Arc::new(StdoutTranscriptView),
        SpeechInput::new(recognizer, locale.clone()),
        SpeechOutput::new(Arc::new(ConsoleSynthesizer), locale),
    ));

    controller.open().await;

    let typed = controller.submit("Como me inscrevo?").await;
    println!("typed: {typed:?}");

    if let Some(label) = controller.suggestions().last().cloned() {
        let suggested = controller.submit_suggestion(&label).await;
        println!("suggestion: {suggested:?}");
    }

    let voiced = controller.listen_and_submit().await;
    println!("voice: {voiced:?}");

    // A click inside the widget body must not close it.
    controller.overlay_activated(true).await;

    controller.close().await;
    println!("status: {:?}", controller.status().await);

    Ok(())
}
