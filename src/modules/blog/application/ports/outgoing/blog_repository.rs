use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::blog_query::BlogView;

/// Allow-listed fields for a new blog row. Built only from a validated
/// command, never straight from the request body.
#[derive(Debug, Clone)]
pub struct NewBlogData {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub author: String,
    pub read_time: String,
    pub category: String,
    pub published: bool,
    pub featured: bool,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

/// Partial update: `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<NaiveDate>,
    pub author: Option<String>,
    pub read_time: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, data: NewBlogData) -> Result<BlogView, BlogRepositoryError>;

    async fn update(&self, id: Uuid, patch: BlogPatch) -> Result<BlogView, BlogRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError>;

    /// Single-statement `views = views + 1`; concurrent reads all land.
    async fn increment_views(&self, id: Uuid) -> Result<(), BlogRepositoryError>;
}
