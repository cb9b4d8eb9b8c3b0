//! Entry points for content and suggestion generation.
//!
//! Live backend failures never reach the caller: they are logged and answered
//! with deterministic copy. The only error returned is
//! [`GenerationError::ModelUnavailable`].

use tracing::{debug, info, warn};

use crate::domains::content::models::{ContentKind, ContentStatus};
use crate::kernel::{BaseAI, CompletionRequest, GenerationBackends};

use super::capabilities::{GenerationSettings, OFFLINE_MODEL_ID, SUGGESTION_ROLE};
use super::error::GenerationError;
use super::fallback::{fallback_keywords, fallback_topics, offline_content};
use super::normalize::{clean, parse_numbered_list};
use super::prompts::{
    build_content_prompt, build_suggestion_prompt, CONTENT_SYSTEM_PROMPT,
    SUGGESTION_SYSTEM_PROMPT,
};
use super::selector::{resolve_model, BackendSelector, SelectedBackend};
use super::seo;
use super::types::{
    BusinessContext, GenerationParams, GenerationResult, SuggestionHints, SuggestionMode,
};

const CONTENT_TEMPERATURE: f32 = 0.7;
const SUGGESTION_TEMPERATURE: f32 = 0.8;
const LOCAL_TOP_P: f32 = 0.9;
const SUGGESTION_MAX_TOKENS: u32 = 300;
const DEFAULT_TITLE: &str = "Generated Content";

/// Composes prompt building, backend selection, cleanup and SEO derivation.
///
/// Holds only read-only settings and shared adapters, so one instance serves
/// any number of concurrent requests.
#[derive(Clone)]
pub struct ContentGenerator {
    settings: GenerationSettings,
    backends: GenerationBackends,
}

impl ContentGenerator {
    pub fn new(settings: GenerationSettings, backends: GenerationBackends) -> Self {
        Self { settings, backends }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub async fn generate_content(
        &self,
        business: &BusinessContext,
        kind: ContentKind,
        topic: Option<&str>,
        keywords: &[String],
    ) -> Result<GenerationResult, GenerationError> {
        let prompt = build_content_prompt(business, kind, topic, keywords);
        let (content_text, ai_model_used) = self.write_content(&prompt, kind).await?;

        let seo = seo::derive(&content_text, keywords);
        let title = seo
            .title
            .or_else(|| {
                topic
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        info!(
            business_id = business.id,
            kind = %kind,
            model = %ai_model_used,
            seo_score = seo.seo_score,
            "Generated content"
        );

        Ok(GenerationResult {
            title,
            content_text,
            content_type: kind,
            business_id: business.id,
            status: ContentStatus::PendingApproval,
            meta_description: seo.meta_description,
            keywords: seo.keywords,
            seo_score: seo.seo_score,
            ai_prompt_used: prompt,
            ai_model_used,
            generation_settings: GenerationParams {
                temperature: CONTENT_TEMPERATURE,
                max_tokens: kind.max_output_tokens(),
            },
            is_auto_generated: true,
            requires_approval: true,
        })
    }

    /// Up to 5 topic ideas.
    pub async fn generate_topic_suggestions(
        &self,
        business: &BusinessContext,
        kind: ContentKind,
        category: Option<&str>,
        description: Option<&str>,
    ) -> Result<Vec<String>, GenerationError> {
        let hints = SuggestionHints {
            category: category.map(str::to_string),
            topic: None,
            description: description.map(str::to_string),
        };
        self.suggest(business, kind, &hints, SuggestionMode::Topics)
            .await
    }

    /// Up to 10 SEO keywords.
    pub async fn generate_keyword_suggestions(
        &self,
        business: &BusinessContext,
        kind: ContentKind,
        category: Option<&str>,
        topic: Option<&str>,
        description: Option<&str>,
    ) -> Result<Vec<String>, GenerationError> {
        let hints = SuggestionHints {
            category: category.map(str::to_string),
            topic: topic.map(str::to_string),
            description: description.map(str::to_string),
        };
        self.suggest(business, kind, &hints, SuggestionMode::Keywords)
            .await
    }

    /// Returns the cleaned text and the identifier of the backend that wrote it.
    async fn write_content(
        &self,
        prompt: &str,
        kind: ContentKind,
    ) -> Result<(String, String), GenerationError> {
        let selected = BackendSelector::new(&self.settings, &self.backends)
            .select()
            .await;
        let backend = selected.name();
        let max_tokens = kind.max_output_tokens();

        let attempt = match &selected {
            SelectedBackend::Local(local) => {
                let model = resolve_model(&self.settings, kind.model_role(), &local.loaded_models)?;
                info!(backend, model = %model, kind = %kind, "Selected generation backend");
                let request = CompletionRequest::new(&model, prompt)
                    .system(CONTENT_SYSTEM_PROMPT)
                    .max_tokens(max_tokens)
                    .temperature(CONTENT_TEMPERATURE)
                    .top_p(LOCAL_TOP_P);
                execute(backend, local.client.as_ref(), request)
                    .await
                    .map(|text| (text, format!("ollama-{}", model)))
            }
            SelectedBackend::CloudPrimary(client) => {
                let model = &self.settings.anthropic_model;
                info!(backend, model = %model, kind = %kind, "Selected generation backend");
                let request = cloud_request(model, prompt, max_tokens);
                execute(backend, client.as_ref(), request)
                    .await
                    .map(|text| (text, format!("anthropic-{}", model)))
            }
            SelectedBackend::CloudSecondary(client) => {
                let model = &self.settings.openai_model;
                info!(backend, model = %model, kind = %kind, "Selected generation backend");
                let request = cloud_request(model, prompt, max_tokens);
                execute(backend, client.as_ref(), request)
                    .await
                    .map(|text| (text, format!("openai-{}", model)))
            }
            SelectedBackend::Offline => {
                debug!(kind = %kind, "No live backend configured, using offline content");
                return Ok(offline(kind));
            }
        };

        Ok(attempt.unwrap_or_else(|error| {
            warn!(error = %error, kind = %kind, "Generation failed, using offline content");
            offline(kind)
        }))
    }

    async fn suggest(
        &self,
        business: &BusinessContext,
        kind: ContentKind,
        hints: &SuggestionHints,
        mode: SuggestionMode,
    ) -> Result<Vec<String>, GenerationError> {
        let fallback = || match mode {
            SuggestionMode::Topics => fallback_topics(business),
            SuggestionMode::Keywords => fallback_keywords(business),
        };

        let selector = BackendSelector::new(&self.settings, &self.backends);
        let Some(local) = selector.probe_local().await else {
            debug!(mode = mode.noun(), "Local backend not eligible, using fallback suggestions");
            return Ok(fallback());
        };

        let model = resolve_model(&self.settings, SUGGESTION_ROLE, &local.loaded_models)?;
        debug!(model = %model, mode = mode.noun(), "Requesting suggestions");

        let prompt = build_suggestion_prompt(business, kind, hints, mode);
        let request = CompletionRequest::new(&model, prompt)
            .system(SUGGESTION_SYSTEM_PROMPT)
            .max_tokens(SUGGESTION_MAX_TOKENS)
            .temperature(SUGGESTION_TEMPERATURE)
            .top_p(LOCAL_TOP_P);

        let reply = match execute("ollama", local.client.as_ref(), request).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(error = %error, mode = mode.noun(), "Suggestion generation failed");
                return Ok(fallback());
            }
        };

        let mut items = parse_numbered_list(&reply);
        if items.is_empty() {
            warn!(
                error = %GenerationError::EmptyParseResult,
                mode = mode.noun(),
                "Using fallback suggestions"
            );
            return Ok(fallback());
        }
        items.truncate(mode.limit());
        Ok(items)
    }
}

/// Run one live call and clean its reply. An empty reply counts as a failure.
async fn execute<C>(
    backend: &str,
    client: &C,
    request: CompletionRequest,
) -> Result<String, GenerationError>
where
    C: BaseAI + ?Sized,
{
    let raw = client
        .complete(request)
        .await
        .map_err(|e| GenerationError::GenerationCallFailed {
            backend: backend.to_string(),
            message: e.to_string(),
        })?;

    let text = clean(&raw);
    if text.is_empty() {
        return Err(GenerationError::GenerationCallFailed {
            backend: backend.to_string(),
            message: "empty reply".to_string(),
        });
    }
    Ok(text)
}

fn cloud_request(model: &str, prompt: &str, max_tokens: u32) -> CompletionRequest {
    CompletionRequest::new(model, prompt)
        .system(CONTENT_SYSTEM_PROMPT)
        .max_tokens(max_tokens)
        .temperature(CONTENT_TEMPERATURE)
}

fn offline(kind: ContentKind) -> (String, String) {
    (offline_content(kind).to_string(), OFFLINE_MODEL_ID.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domains::generation::DeploymentEnvironment;
    use crate::kernel::test_dependencies::{MockAI, MockLocalInference};
    use crate::kernel::{BaseAI, BaseLocalInference};

    fn acme() -> BusinessContext {
        BusinessContext::new(1, "Acme Robotics").with_industry("Technology")
    }

    fn generator(backends: GenerationBackends) -> ContentGenerator {
        ContentGenerator::new(GenerationSettings::default(), backends)
    }

    fn local_only(local: &MockLocalInference) -> GenerationBackends {
        GenerationBackends {
            local: Some(Arc::new(local.clone()) as Arc<dyn BaseLocalInference>),
            ..GenerationBackends::default()
        }
    }

    #[tokio::test]
    async fn local_reply_is_cleaned_and_attributed() {
        let local = MockLocalInference::with_models(&["llama3.2:3b"])
            .with_response("<think>I will write a tweet</think>Check out our new product! #Launch");

        let result = generator(local_only(&local))
            .generate_content(&acme(), ContentKind::TwitterPost, None, &[])
            .await
            .unwrap();

        assert_eq!(result.content_text, "Check out our new product! #Launch");
        assert_eq!(result.title, "Check out our new product! #Launch");
        assert_eq!(result.ai_model_used, "ollama-llama3.2:3b");
        assert_eq!(result.generation_settings.max_tokens, 100);

        let request = local.last_request().unwrap();
        assert_eq!(request.model, "llama3.2:3b");
        assert_eq!(request.max_tokens, 100);
        assert_eq!(request.top_p, Some(0.9));
        assert_eq!(request.system.as_deref(), Some(CONTENT_SYSTEM_PROMPT));
        assert_eq!(request.prompt, result.ai_prompt_used);
    }

    #[tokio::test]
    async fn local_failure_falls_back_to_offline_without_retry() {
        let local = MockLocalInference::with_models(&["llama3.2:3b"]).failing();
        let primary = Arc::new(MockAI::new());
        let backends = GenerationBackends {
            cloud_primary: Some(primary.clone() as Arc<dyn BaseAI>),
            ..local_only(&local)
        };

        let result = generator(backends)
            .generate_content(&acme(), ContentKind::BlogPost, None, &[])
            .await
            .unwrap();

        assert_eq!(result.ai_model_used, OFFLINE_MODEL_ID);
        assert_eq!(result.content_text, offline_content(ContentKind::BlogPost));
        assert_eq!(local.call_count(), 1);
        assert_eq!(primary.call_count(), 0);
    }

    #[tokio::test]
    async fn cloud_primary_used_outside_development() {
        let primary = Arc::new(MockAI::new().with_response("# Title\nBody about robotics."));
        let settings = GenerationSettings {
            environment: DeploymentEnvironment::Production,
            ..GenerationSettings::default()
        };
        let backends = GenerationBackends {
            cloud_primary: Some(primary.clone() as Arc<dyn BaseAI>),
            ..GenerationBackends::default()
        };

        let keywords = vec!["robotics".to_string()];
        let result = ContentGenerator::new(settings, backends)
            .generate_content(&acme(), ContentKind::BlogPost, Some("Robots"), &keywords)
            .await
            .unwrap();

        assert_eq!(result.ai_model_used, "anthropic-claude-3-sonnet-20240229");
        assert_eq!(result.title, "Title");
        assert_eq!(result.meta_description, "Body about robotics.");
        assert_eq!(result.seo_score, 75);

        let request = primary.last_request().unwrap();
        assert_eq!(request.model, "claude-3-sonnet-20240229");
        assert_eq!(request.max_tokens, 2000);
        assert_eq!(request.top_p, None);
    }

    #[tokio::test]
    async fn dangling_reasoning_marker_keeps_trailing_text() {
        let primary = Arc::new(MockAI::new().with_response("<think>only thoughts"));
        let backends = GenerationBackends {
            cloud_primary: Some(primary as Arc<dyn BaseAI>),
            ..GenerationBackends::default()
        };

        let result = generator(backends)
            .generate_content(&acme(), ContentKind::AdCopy, None, &[])
            .await
            .unwrap();
        assert_eq!(result.content_text, "only thoughts");
        assert_eq!(result.ai_model_used, "anthropic-claude-3-sonnet-20240229");
    }

    #[tokio::test]
    async fn blank_reply_counts_as_failure() {
        let secondary = Arc::new(MockAI::new().with_response("<think>x</think>   "));
        let backends = GenerationBackends {
            cloud_secondary: Some(secondary as Arc<dyn BaseAI>),
            ..GenerationBackends::default()
        };

        let result = generator(backends)
            .generate_content(&acme(), ContentKind::Email, None, &[])
            .await
            .unwrap();
        assert_eq!(result.ai_model_used, OFFLINE_MODEL_ID);
        assert!(result.content_text.starts_with("Subject:"));
    }

    #[tokio::test]
    async fn topic_suggestions_are_capped_at_five() {
        let reply: String = (1..=8).map(|n| format!("{n}. Robotics topic {n}\n")).collect();
        let local = MockLocalInference::with_models(&["llama3.2:3b"]).with_response(reply);

        let topics = generator(local_only(&local))
            .generate_topic_suggestions(&acme(), ContentKind::BlogPost, Some("Guides"), None)
            .await
            .unwrap();

        assert_eq!(topics.len(), 5);
        assert_eq!(topics[0], "Robotics topic 1");

        let request = local.last_request().unwrap();
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.temperature, 0.8);
        assert_eq!(request.system.as_deref(), Some(SUGGESTION_SYSTEM_PROMPT));
        assert!(request.prompt.contains("- Category: Guides"));
    }

    #[tokio::test]
    async fn unparseable_suggestions_use_fallback_list() {
        let local = MockLocalInference::with_models(&["llama3.2:3b"])
            .with_response("Sure! Here are a few ideas without numbers.");

        let keywords = generator(local_only(&local))
            .generate_keyword_suggestions(&acme(), ContentKind::BlogPost, None, Some("Cobots"), None)
            .await
            .unwrap();

        assert_eq!(keywords, fallback_keywords(&acme()));
    }

    #[tokio::test]
    async fn suggestions_skip_cloud_outside_development() {
        let primary = Arc::new(MockAI::new());
        let settings = GenerationSettings {
            environment: DeploymentEnvironment::Staging,
            ..GenerationSettings::default()
        };
        let backends = GenerationBackends {
            cloud_primary: Some(primary.clone() as Arc<dyn BaseAI>),
            ..GenerationBackends::default()
        };

        let topics = ContentGenerator::new(settings, backends)
            .generate_topic_suggestions(&acme(), ContentKind::LinkedinPost, None, None)
            .await
            .unwrap();

        assert_eq!(topics, fallback_topics(&acme()));
        assert_eq!(primary.call_count(), 0);
    }
}
