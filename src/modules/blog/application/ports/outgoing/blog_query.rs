use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::pagination::{PageRequest, PageResult};

/// Full blog row as returned to both admin and public consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub author: String,
    pub read_time: String,
    pub category: String,
    pub views: i64,
    pub published: bool,
    pub featured: bool,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Whitelisted equality filters plus the OR-search term. Anything else in the
/// query string never reaches this struct.
#[derive(Debug, Clone, Default)]
pub struct BlogListFilter {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BlogSort {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    ViewsDesc,
    /// Unrecognized sort keys are ignored, not errors.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogQuery: Send + Sync {
    async fn list(
        &self,
        filter: BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> Result<PageResult<BlogView>, BlogQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<BlogView, BlogQueryError>;

    /// Public lookup: unpublished rows read as absent.
    async fn get_published_by_slug(&self, slug: &str) -> Result<BlogView, BlogQueryError>;

    /// Featured and published, newest first, capped at `limit`.
    async fn featured(&self, limit: u64) -> Result<Vec<BlogView>, BlogQueryError>;
}
