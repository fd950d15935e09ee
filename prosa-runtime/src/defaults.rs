use prosa_core::config::WidgetConfig;

pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:5000/ask";

pub fn default_widget_config() -> WidgetConfig {
    WidgetConfig {
        endpoint_url: DEFAULT_ENDPOINT_URL.into(),
        locale: "pt-BR".into(),
        greeting: "Olá! Sou o assistente do Jovem Programador. Como posso ajudar?".into(),
        error_reply: "Erro ao conectar ao servidor.".into(),
        greeting_delay_ms: 200,
        suggestions: vec![
            "Como me inscrevo?".into(),
            "Quais cursos existem?".into(),
            "Horários".into(),
        ],
        trust_answer_markup: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(default_widget_config().validate().is_ok());
    }
}
