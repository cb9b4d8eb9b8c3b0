// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;

use super::{
    BaseAI, BaseBusinessStore, BaseContentStore, BaseLocalInference, CompletionRequest,
    GenerationBackends, ServerDeps,
};
use crate::domains::businesses::models::Business;
use crate::domains::content::models::{Content, NewContent};
use crate::domains::generation::{ContentGenerator, DeploymentEnvironment, GenerationSettings};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared reply queue and call log behind every mock model.
#[derive(Clone, Default)]
struct ReplyQueue {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    failing: bool,
}

impl ReplyQueue {
    fn next(&self, request: CompletionRequest) -> Result<String> {
        lock(&self.calls).push(request);

        if self.failing {
            anyhow::bail!("mock backend failure");
        }
        let mut responses = lock(&self.responses);
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            Ok("# Mock Title\n\nMock AI response".to_string())
        }
    }
}

// =============================================================================
// Mock AI (cloud backends)
// =============================================================================

#[derive(Default)]
pub struct MockAI {
    queue: ReplyQueue,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        lock(&self.queue.responses).push(response.into());
        self
    }

    /// Every call returns an error
    pub fn failing(mut self) -> Self {
        self.queue.failing = true;
        self
    }

    /// Get all requests that were sent to the AI
    pub fn calls(&self) -> Vec<CompletionRequest> {
        lock(&self.queue.calls).clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        lock(&self.queue.calls).last().cloned()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.queue.calls).len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.queue.next(request)
    }
}

// =============================================================================
// Mock Local Inference
// =============================================================================

/// Clones share state, so a test can keep a handle after injecting one.
#[derive(Clone)]
pub struct MockLocalInference {
    /// `None` makes the liveness probe fail
    models: Option<Vec<String>>,
    queue: ReplyQueue,
    probes: Arc<Mutex<usize>>,
}

impl MockLocalInference {
    pub fn with_models(models: &[&str]) -> Self {
        Self {
            models: Some(models.iter().map(|m| m.to_string()).collect()),
            queue: ReplyQueue::default(),
            probes: Arc::new(Mutex::new(0)),
        }
    }

    /// A server that never answers the probe
    pub fn unreachable() -> Self {
        Self {
            models: None,
            ..Self::with_models(&[])
        }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        lock(&self.queue.responses).push(response.into());
        self
    }

    /// Probe succeeds, every completion errors
    pub fn failing(mut self) -> Self {
        self.queue.failing = true;
        self
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        lock(&self.queue.calls).clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        lock(&self.queue.calls).last().cloned()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.queue.calls).len()
    }

    /// Number of liveness probes received
    pub fn probe_count(&self) -> usize {
        *lock(&self.probes)
    }
}

#[async_trait]
impl BaseAI for MockLocalInference {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.queue.next(request)
    }
}

#[async_trait]
impl BaseLocalInference for MockLocalInference {
    async fn list_models(&self) -> Result<Vec<String>> {
        *lock(&self.probes) += 1;
        self.models
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}

// =============================================================================
// Mock Stores
// =============================================================================

/// Business row with only the prompt-relevant fields filled in
pub fn sample_business(id: i32, name: &str, industry: Option<&str>) -> Business {
    Business {
        id,
        name: name.to_string(),
        industry: industry.map(str::to_string),
        description: None,
        website_url: None,
        location: None,
        target_audience: None,
        brand_voice: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

#[derive(Default)]
pub struct MockBusinessStore {
    businesses: Mutex<HashMap<i32, Business>>,
}

impl MockBusinessStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, business: Business) {
        lock(&self.businesses).insert(business.id, business);
    }
}

#[async_trait]
impl BaseBusinessStore for MockBusinessStore {
    async fn find_business(&self, id: i32) -> Result<Option<Business>> {
        Ok(lock(&self.businesses).get(&id).cloned())
    }
}

#[derive(Default)]
pub struct MockContentStore {
    inserted: Mutex<Vec<NewContent>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in insertion order
    pub fn inserted(&self) -> Vec<NewContent> {
        lock(&self.inserted).clone()
    }
}

#[async_trait]
impl BaseContentStore for MockContentStore {
    async fn insert_content(&self, content: NewContent) -> Result<Content> {
        let mut inserted = lock(&self.inserted);
        inserted.push(content.clone());

        Ok(Content {
            id: inserted.len() as i32,
            business_id: content.business_id,
            campaign_id: content.campaign_id,
            title: content.title,
            content_text: content.content_text,
            content_type: content.content_type.to_string(),
            status: content.status.to_string(),
            meta_description: content.meta_description,
            keywords: Some(Json(content.keywords)),
            seo_score: Some(content.seo_score),
            ai_prompt_used: Some(content.ai_prompt_used),
            ai_model_used: Some(content.ai_model_used),
            generation_settings: Some(Json(content.generation_settings)),
            is_auto_generated: content.is_auto_generated,
            requires_approval: content.requires_approval,
            created_at: Utc::now(),
            updated_at: None,
        })
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for a fully mocked ServerDeps. No backend is configured by default.
pub struct TestDependencies {
    pub settings: GenerationSettings,
    pub local: Option<MockLocalInference>,
    pub cloud_primary: Option<Arc<MockAI>>,
    pub cloud_secondary: Option<Arc<MockAI>>,
    pub business_store: Arc<MockBusinessStore>,
    pub content_store: Arc<MockContentStore>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            settings: GenerationSettings::default(),
            local: None,
            cloud_primary: None,
            cloud_secondary: None,
            business_store: Arc::new(MockBusinessStore::new()),
            content_store: Arc::new(MockContentStore::new()),
        }
    }

    pub fn environment(mut self, environment: DeploymentEnvironment) -> Self {
        self.settings.environment = environment;
        self
    }

    /// Set a mock local inference server
    pub fn mock_local(mut self, local: MockLocalInference) -> Self {
        self.local = Some(local);
        self
    }

    /// Set a mock primary cloud provider
    pub fn mock_cloud_primary(mut self, ai: MockAI) -> Self {
        self.cloud_primary = Some(Arc::new(ai));
        self
    }

    /// Set a mock secondary cloud provider
    pub fn mock_cloud_secondary(mut self, ai: MockAI) -> Self {
        self.cloud_secondary = Some(Arc::new(ai));
        self
    }

    pub fn with_business(self, business: Business) -> Self {
        self.business_store.insert(business);
        self
    }

    pub fn backends(&self) -> GenerationBackends {
        GenerationBackends {
            local: self
                .local
                .clone()
                .map(|l| Arc::new(l) as Arc<dyn BaseLocalInference>),
            cloud_primary: self.cloud_primary.clone().map(|ai| ai as Arc<dyn BaseAI>),
            cloud_secondary: self.cloud_secondary.clone().map(|ai| ai as Arc<dyn BaseAI>),
        }
    }

    pub fn generator(&self) -> ContentGenerator {
        ContentGenerator::new(self.settings.clone(), self.backends())
    }

    /// Build ServerDeps; the mocks stay reachable through `self`.
    pub fn deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.generator(),
            self.business_store.clone(),
            self.content_store.clone(),
        )
    }
}
