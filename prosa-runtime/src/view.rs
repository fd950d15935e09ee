use prosa_core::types::{Role, Turn};
use prosa_engine::traits::TranscriptView;

/// Terminal transcript log. User entries put the content before the
/// attribution mark, bot entries the mark before the content, mirroring
/// the widget's avatar ordering. A terminal scrolls on its own, so the
/// keep-latest-visible part of the contract comes for free.
#[derive(Debug, Clone, Default)]
pub struct StdoutTranscriptView;

impl TranscriptView for StdoutTranscriptView {
    fn render(&self, turn: &Turn) {
        match turn.role {
            Role::User => println!("{} <[você]", turn.content),
            Role::Bot => println!("[bot]> {}", turn.content),
        }
    }

    fn reset(&self) {
        println!("--- nova conversa ---");
    }
}
