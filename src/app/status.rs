use crate::config::Config;
use crate::llm::GeminiProvider;
use crate::ui::style;

pub fn render_status(config: &Config) -> String {
    let provider = GeminiProvider::new(config.api_key.as_deref());

    let lines = vec![
        "◆ Nexus Executive Terminal".to_string(),
        String::new(),
        format!("  Version      {}", env!("CARGO_PKG_VERSION")),
        format!("  Config       {}", config.config_path.display()),
        String::new(),
        format!("  Provider     {}", style::value("gemini")),
        format!("  Model        {}", style::value(&config.default_model)),
        format!("  Temperature  {}", style::value(config.default_temperature)),
        format!("  Credential   {}", style::value(provider.auth_source())),
    ];

    lines.join("\n")
}
