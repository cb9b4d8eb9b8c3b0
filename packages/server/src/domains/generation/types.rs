use serde::{Deserialize, Serialize};

use crate::domains::content::models::{ContentKind, ContentStatus};

/// The slice of a business record that parameterises prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusinessContext {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub brand_voice: Option<String>,
    pub website: Option<String>,
}

impl BusinessContext {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }
}

/// Sampling parameters recorded alongside generated content
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A freshly generated, not yet persisted piece of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub title: String,
    pub content_text: String,
    pub content_type: ContentKind,
    pub business_id: i32,
    pub status: ContentStatus,
    pub meta_description: String,
    pub keywords: Vec<String>,
    /// Always within 0..=100
    pub seo_score: u8,
    pub ai_prompt_used: String,
    pub ai_model_used: String,
    pub generation_settings: GenerationParams,
    pub is_auto_generated: bool,
    pub requires_approval: bool,
}

/// Which kind of suggestion list is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionMode {
    Topics,
    Keywords,
}

impl SuggestionMode {
    /// Items requested from the model and the hard cap on what is returned.
    pub fn limit(self) -> usize {
        match self {
            SuggestionMode::Topics => 5,
            SuggestionMode::Keywords => 10,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            SuggestionMode::Topics => "topics",
            SuggestionMode::Keywords => "keywords",
        }
    }
}

/// Optional hints for a suggestion request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionHints {
    pub category: Option<String>,
    pub topic: Option<String>,
    pub description: Option<String>,
}
