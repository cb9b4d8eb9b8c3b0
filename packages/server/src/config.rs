use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::collections::HashMap;
use std::env;

use crate::domains::generation::{DeploymentEnvironment, GenerationSettings, ModelCapabilityTable};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub environment: DeploymentEnvironment,
    pub cors_origins: Vec<String>,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub ollama_base_url: String,
    pub ollama_default_model: String,
    pub ollama_models: ModelCapabilityTable,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let ollama_default_model =
            env::var("OLLAMA_DEFAULT_MODEL").unwrap_or_else(|_| "llama3.2:3b".to_string());

        let overrides = match env::var("OLLAMA_MODELS") {
            Ok(raw) => parse_model_overrides(&raw).context("OLLAMA_MODELS must be a JSON object")?,
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: env::var("ENVIRONMENT")
                .map(|v| DeploymentEnvironment::from_label(&v))
                .unwrap_or(DeploymentEnvironment::Development),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| parse_cors_origins(&v))
                .unwrap_or_default(),
            anthropic_api_key: secret("ANTHROPIC_API_KEY"),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| "claude-3-sonnet-20240229".to_string()),
            openai_api_key: secret("OPENAI_API_KEY"),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            ollama_base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://host.docker.internal:11434".to_string()),
            ollama_models: ModelCapabilityTable::builtin(&ollama_default_model)
                .with_overrides(overrides),
            ollama_default_model,
        })
    }

    pub fn is_local_development(&self) -> bool {
        self.environment == DeploymentEnvironment::Development
    }

    /// The read-only settings the generation core needs.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            environment: self.environment,
            default_model: self.ollama_default_model.clone(),
            models: self.ollama_models.clone(),
            anthropic_model: self.anthropic_model.clone(),
            openai_model: self.openai_model.clone(),
        }
    }
}

/// A credential that is unset or blank counts as not configured.
fn secret(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_model_overrides(raw: &str) -> Result<HashMap<String, String>> {
    serde_json::from_str(raw).map_err(Into::into)
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        assert_eq!(
            parse_cors_origins("https://a.example, https://b.example ,,"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn model_overrides_parse_from_json_object() {
        let overrides = parse_model_overrides(r#"{"fast":"qwen2.5:7b"}"#).unwrap();
        assert_eq!(overrides.get("fast").map(String::as_str), Some("qwen2.5:7b"));
    }

    #[test]
    fn model_overrides_reject_non_objects() {
        assert!(parse_model_overrides(r#"["fast"]"#).is_err());
    }
}
