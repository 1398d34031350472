use anyhow::{Context, Result};

use super::core::YourOrbitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl std::str::FromStr for ConfigFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(anyhow::anyhow!("Unsupported format: {}. Use json, toml, or yaml", s)),
        }
    }
}

impl ConfigFormat {
    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl YourOrbitConfig {
    /// Export configuration in specified format
    pub fn export_config(&self, format: ConfigFormat) -> Result<String> {
        let config: serde_json::Value = self.get_full_config()?;

        let output = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
            ConfigFormat::Toml => toml::to_string_pretty(&config).context("Failed to render config as TOML")?,
            ConfigFormat::Yaml => serde_yml::to_string(&config)?,
        };

        Ok(output)
    }

    /// Export configuration with syntax highlighting when stdout is a terminal
    pub fn export_config_highlighted(&self, format: ConfigFormat) -> Result<String> {
        use syntect::easy::HighlightLines;
        use syntect::highlighting::Style;
        use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};
        use two_face::theme::EmbeddedThemeName;
        use two_face::{syntax, theme};

        let output = self.export_config(format)?;

        if !atty::is(atty::Stream::Stdout) || !console::colors_enabled() {
            return Ok(output);
        }

        let ps = syntax::extra_newlines();
        let ts = theme::extra();
        let syntax = ps
            .find_syntax_by_extension(format.extension())
            .unwrap_or_else(|| ps.find_syntax_plain_text());

        let theme = ts.get(EmbeddedThemeName::Base16OceanDark);
        let mut h = HighlightLines::new(syntax, theme);
        let mut highlighted = String::new();

        for line in LinesWithEndings::from(&output) {
            let ranges: Vec<(Style, &str)> = h.highlight_line(line, &ps)?;
            highlighted.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        // Reset terminal colors after the last line
        highlighted.push_str("\x1b[0m");

        Ok(highlighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_export_formats() {
        let config = YourOrbitConfig::load().unwrap();

        let json_output = config.export_config(ConfigFormat::Json).unwrap();
        assert!(json_output.contains("\"dropzone\""));
        assert!(json_output.contains("5242880"));

        let toml_output = config.export_config(ConfigFormat::Toml).unwrap();
        assert!(toml_output.contains("[dropzone]"));

        let yaml_output = config.export_config(ConfigFormat::Yaml).unwrap();
        assert!(yaml_output.contains("dropzone:"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert_eq!("yml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
        assert!("xml".parse::<ConfigFormat>().is_err());
    }

    #[test]
    fn test_syntax_highlighting() {
        let config = YourOrbitConfig::load().unwrap();

        // Falls back to plain text outside a TTY
        let highlighted = config.export_config_highlighted(ConfigFormat::Json);
        assert!(highlighted.is_ok());
    }
}
