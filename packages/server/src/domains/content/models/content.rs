use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::domains::generation::{GenerationParams, GenerationResult};

/// Output format a piece of content is written for.
///
/// Drives the prompt template, the output token budget and the preferred
/// local model role.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[default]
    BlogPost,
    LinkedinPost,
    TwitterPost,
    FacebookPost,
    InstagramPost,
    RedditPost,
    QuoraPost,
    Email,
    AdCopy,
}

impl ContentKind {
    pub const ALL: [ContentKind; 9] = [
        ContentKind::BlogPost,
        ContentKind::LinkedinPost,
        ContentKind::TwitterPost,
        ContentKind::FacebookPost,
        ContentKind::InstagramPost,
        ContentKind::RedditPost,
        ContentKind::QuoraPost,
        ContentKind::Email,
        ContentKind::AdCopy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::BlogPost => "blog_post",
            ContentKind::LinkedinPost => "linkedin_post",
            ContentKind::TwitterPost => "twitter_post",
            ContentKind::FacebookPost => "facebook_post",
            ContentKind::InstagramPost => "instagram_post",
            ContentKind::RedditPost => "reddit_post",
            ContentKind::QuoraPost => "quora_post",
            ContentKind::Email => "email",
            ContentKind::AdCopy => "ad_copy",
        }
    }

    /// Lenient parse for free-text labels: anything unrecognised is a blog post.
    pub fn from_label_or_default(label: &str) -> Self {
        label.trim().to_lowercase().parse().unwrap_or_default()
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid content type: {}", s))
    }
}

/// Review lifecycle of a content record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    PendingApproval,
    Approved,
    Published,
    Scheduled,
    Failed,
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::PendingApproval => write!(f, "pending_approval"),
            ContentStatus::Approved => write!(f, "approved"),
            ContentStatus::Published => write!(f, "published"),
            ContentStatus::Scheduled => write!(f, "scheduled"),
            ContentStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for ContentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(ContentStatus::Draft),
            "pending_approval" => Ok(ContentStatus::PendingApproval),
            "approved" => Ok(ContentStatus::Approved),
            "published" => Ok(ContentStatus::Published),
            "scheduled" => Ok(ContentStatus::Scheduled),
            "failed" => Ok(ContentStatus::Failed),
            _ => Err(anyhow::anyhow!("Invalid content status: {}", s)),
        }
    }
}

/// Stored content row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub id: i32,
    pub business_id: i32,
    pub campaign_id: Option<i32>,

    pub title: String,
    pub content_text: String,
    pub content_type: String,
    pub status: String,

    // SEO
    pub meta_description: Option<String>,
    pub keywords: Option<Json<Vec<String>>>,
    pub seo_score: Option<i32>,

    // Generation metadata
    pub ai_prompt_used: Option<String>,
    pub ai_model_used: Option<String>,
    pub generation_settings: Option<Json<GenerationParams>>,
    pub is_auto_generated: bool,
    pub requires_approval: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload for a content row
#[derive(Debug, Clone, PartialEq)]
pub struct NewContent {
    pub business_id: i32,
    pub campaign_id: Option<i32>,
    pub title: String,
    pub content_text: String,
    pub content_type: ContentKind,
    pub status: ContentStatus,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
    pub seo_score: i32,
    pub ai_prompt_used: String,
    pub ai_model_used: String,
    pub generation_settings: GenerationParams,
    pub is_auto_generated: bool,
    pub requires_approval: bool,
}

impl NewContent {
    pub fn from_generation(result: GenerationResult, campaign_id: Option<i32>) -> Self {
        Self {
            business_id: result.business_id,
            campaign_id,
            title: result.title,
            content_text: result.content_text,
            content_type: result.content_type,
            status: result.status,
            meta_description: Some(result.meta_description).filter(|m| !m.is_empty()),
            keywords: result.keywords,
            seo_score: i32::from(result.seo_score),
            ai_prompt_used: result.ai_prompt_used,
            ai_model_used: result.ai_model_used,
            generation_settings: result.generation_settings,
            is_auto_generated: result.is_auto_generated,
            requires_approval: result.requires_approval,
        }
    }
}

impl Content {
    pub async fn create(input: NewContent, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO content (
                business_id, campaign_id, title, content_text, content_type, status,
                meta_description, keywords, seo_score, ai_prompt_used, ai_model_used,
                generation_settings, is_auto_generated, requires_approval
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING *",
        )
        .bind(input.business_id)
        .bind(input.campaign_id)
        .bind(input.title)
        .bind(input.content_text)
        .bind(input.content_type.to_string())
        .bind(input.status.to_string())
        .bind(input.meta_description)
        .bind(Json(input.keywords))
        .bind(input.seo_score)
        .bind(input.ai_prompt_used)
        .bind(input.ai_model_used)
        .bind(Json(input.generation_settings))
        .bind(input.is_auto_generated)
        .bind(input.requires_approval)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_label() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.as_str().parse::<ContentKind>().unwrap(), kind);
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_blog_post() {
        assert_eq!(ContentKind::from_label_or_default("podcast"), ContentKind::BlogPost);
        assert_eq!(
            ContentKind::from_label_or_default(" Twitter_Post "),
            ContentKind::TwitterPost
        );
        assert!("podcast".parse::<ContentKind>().is_err());
    }

    #[test]
    fn status_labels_match_storage_format() {
        assert_eq!(ContentStatus::PendingApproval.to_string(), "pending_approval");
        assert_eq!(
            "pending_approval".parse::<ContentStatus>().unwrap(),
            ContentStatus::PendingApproval
        );
        assert!("archived".parse::<ContentStatus>().is_err());
    }
}
