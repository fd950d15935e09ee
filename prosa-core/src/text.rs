use regex::Regex;
use std::sync::OnceLock;

fn markup_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Strips tags, keeps element text: "<b>Oi</b>" becomes "Oi".
        // Good enough for rendering untrusted answers as plain text; this
        // is not an HTML parser.
        Regex::new(r"</?[^>]+>").expect("valid markup tag regex")
    })
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"))
}

/// Trims a candidate question. All-whitespace input is a no-op for the
/// submission pipeline, not an error.
pub fn normalize_question(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reduces endpoint markup to plain text for untrusted rendering.
pub fn strip_markup(text: &str) -> String {
    let out = markup_tag_re().replace_all(text, "");
    let out = whitespace_re().replace_all(&out, " ");
    out.trim().to_string()
}
