//! Read-only model configuration shared by every generation call.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domains::content::models::ContentKind;

/// Model identifier reported when text comes from the built-in fallback copy.
pub const OFFLINE_MODEL_ID: &str = "mock-content";

/// Roles tried, in order, when the preferred model for a request is not loaded.
pub const FALLBACK_ROLES: [&str; 2] = ["default", "fast"];

/// Role used for topic and keyword suggestions.
pub const SUGGESTION_ROLE: &str = "fast";

/// Where the process is running. Only development may use the local server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    Development,
    Staging,
    Production,
}

impl DeploymentEnvironment {
    /// Unknown labels are treated as production so the local server is never
    /// tried by accident.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => DeploymentEnvironment::Development,
            "staging" => DeploymentEnvironment::Staging,
            _ => DeploymentEnvironment::Production,
        }
    }
}

impl std::fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentEnvironment::Development => write!(f, "development"),
            DeploymentEnvironment::Staging => write!(f, "staging"),
            DeploymentEnvironment::Production => write!(f, "production"),
        }
    }
}

/// Logical role -> concrete local model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelCapabilityTable {
    roles: BTreeMap<String, String>,
}

impl ModelCapabilityTable {
    pub fn builtin(default_model: &str) -> Self {
        let roles = [
            ("default", default_model),
            ("fast", "llama3.2:3b"),
            ("quick", "llama3.2:3b"),
            ("professional", "phi3:3.8b"),
            ("blog_post", "phi3:3.8b"),
            ("technical", "phi3:3.8b"),
            ("social_media", "llama3.2:3b"),
            ("creative", "llama3.2:3b"),
            ("high_quality", "llama3.1:70b"),
            ("balanced", "llama3.1:8b"),
        ]
        .into_iter()
        .map(|(role, model)| (role.to_string(), model.to_string()))
        .collect();

        Self { roles }
    }

    /// Replace or add role entries.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.roles.extend(overrides);
        self
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(String::as_str)
    }

    pub fn roles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(r, m)| (r.as_str(), m.as_str()))
    }
}

/// Descriptive facts about a local model. Informational only.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelInfo {
    pub model: &'static str,
    pub size: &'static str,
    pub speed: &'static str,
    pub quality: &'static str,
    pub best_for: &'static str,
    pub description: &'static str,
}

pub const MODEL_INFO: [ModelInfo; 6] = [
    ModelInfo {
        model: "llama3.1:8b",
        size: "~4.7GB",
        speed: "Medium",
        quality: "High",
        best_for: "General content, blogs, professional writing",
        description: "Meta's flagship model - excellent all-rounder",
    },
    ModelInfo {
        model: "llama3.2:3b",
        size: "~2GB",
        speed: "Fast",
        quality: "Good",
        best_for: "Social media, quick content, development testing",
        description: "Smaller, faster version for quick tasks",
    },
    ModelInfo {
        model: "llama3.1:70b",
        size: "~35GB",
        speed: "Slow",
        quality: "Excellent",
        best_for: "High-quality content, complex analysis, production",
        description: "Highest quality but requires lots of RAM",
    },
    ModelInfo {
        model: "deepseek-r1:1.5b",
        size: "~1.1GB",
        speed: "Medium",
        quality: "Good (with reasoning)",
        best_for: "Analysis, research, step-by-step content",
        description: "Reasoning model - shows thinking process",
    },
    ModelInfo {
        model: "codellama:7b",
        size: "~3.8GB",
        speed: "Medium",
        quality: "High",
        best_for: "Technical content, code examples, documentation",
        description: "Specialized for code and technical writing",
    },
    ModelInfo {
        model: "qwen2.5:7b",
        size: "~4.4GB",
        speed: "Medium",
        quality: "High",
        best_for: "Multilingual content, direct responses",
        description: "Excellent for clean, direct content generation",
    },
];

impl ContentKind {
    /// Output token cap sent to every live backend.
    pub fn max_output_tokens(self) -> u32 {
        match self {
            ContentKind::BlogPost => 2000,
            ContentKind::LinkedinPost => 400,
            ContentKind::TwitterPost => 100,
            ContentKind::FacebookPost => 300,
            ContentKind::InstagramPost => 400,
            ContentKind::RedditPost => 500,
            ContentKind::QuoraPost => 800,
            ContentKind::Email => 1000,
            ContentKind::AdCopy => 200,
        }
    }

    /// Preferred local model role.
    pub fn model_role(self) -> &'static str {
        match self {
            ContentKind::BlogPost => "blog_post",
            ContentKind::LinkedinPost
            | ContentKind::TwitterPost
            | ContentKind::FacebookPost
            | ContentKind::RedditPost
            | ContentKind::QuoraPost => "social_media",
            ContentKind::InstagramPost | ContentKind::Email | ContentKind::AdCopy => "creative",
        }
    }
}

/// Everything the generation core reads from configuration.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub environment: DeploymentEnvironment,
    pub default_model: String,
    pub models: ModelCapabilityTable,
    pub anthropic_model: String,
    pub openai_model: String,
}

impl GenerationSettings {
    pub fn is_local_development(&self) -> bool {
        self.environment == DeploymentEnvironment::Development
    }

    /// Model for a role; a role missing from the table means the default model.
    pub fn model_for_role(&self, role: &str) -> &str {
        self.models.get(role).unwrap_or(&self.default_model)
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let default_model = "llama3.2:3b".to_string();
        Self {
            environment: DeploymentEnvironment::Development,
            models: ModelCapabilityTable::builtin(&default_model),
            default_model,
            anthropic_model: "claude-3-sonnet-20240229".to_string(),
            openai_model: "gpt-4".to_string(),
        }
    }
}
