use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

/// Extracts the `answer` field; any additional fields are ignored.
pub fn parse_ask_answer(body: &[u8]) -> anyhow::Result<String> {
    let resp: AskResponse = serde_json::from_slice(body).context("decode answer JSON")?;
    Ok(resp.answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_field() {
        let body = r#"{"answer":"Olá, posso ajudar com inscrições."}"#.as_bytes();
        assert_eq!(
            parse_ask_answer(body).unwrap(),
            "Olá, posso ajudar com inscrições."
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = br#"{"answer":"oi","source":"faq","score":0.93}"#;
        assert_eq!(parse_ask_answer(body).unwrap(), "oi");
    }

    #[test]
    fn missing_answer_errors() {
        let body = br#"{"resposta":"oi"}"#;
        assert!(parse_ask_answer(body).is_err());
    }

    #[test]
    fn non_json_body_errors() {
        let body = b"<html>502 Bad Gateway</html>";
        assert!(parse_ask_answer(body).is_err());
    }
}
