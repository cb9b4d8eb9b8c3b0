// Postgres implementation of the store traits
//
// Thin delegation to the model methods; queries live next to the models.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::{BaseBusinessStore, BaseContentStore};
use crate::domains::businesses::models::Business;
use crate::domains::content::models::{Content, NewContent};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseBusinessStore for PgStore {
    async fn find_business(&self, id: i32) -> Result<Option<Business>> {
        Business::find_by_id(id, &self.pool).await
    }
}

#[async_trait]
impl BaseContentStore for PgStore {
    async fn insert_content(&self, content: NewContent) -> Result<Content> {
        Content::create(content, &self.pool).await
    }
}
