use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::domains::generation::BusinessContext;

/// Business model - the company content is written for
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Business {
    pub id: i32,

    // Profile
    pub name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub location: Option<String>,

    // Voice
    pub target_audience: Option<String>,
    pub brand_voice: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Business {
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM businesses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// The fields prompts are built from.
    pub fn context(&self) -> BusinessContext {
        BusinessContext {
            id: self.id,
            name: self.name.clone(),
            industry: self.industry.clone(),
            description: self.description.clone(),
            target_audience: self.target_audience.clone(),
            brand_voice: self.brand_voice.clone(),
            website: self.website_url.clone(),
        }
    }
}
