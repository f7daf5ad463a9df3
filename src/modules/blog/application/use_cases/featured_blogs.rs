use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogView};

const FEATURED_CAP: u64 = 5;

// ========================= Featured Blogs Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum FeaturedBlogsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFeaturedBlogsUseCase: Send + Sync {
    async fn execute(&self, limit: Option<u64>) -> Result<Vec<BlogView>, FeaturedBlogsError>;
}

#[derive(Debug, Clone)]
pub struct FeaturedBlogsUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FeaturedBlogsUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFeaturedBlogsUseCase for FeaturedBlogsUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, limit: Option<u64>) -> Result<Vec<BlogView>, FeaturedBlogsError> {
        let limit = match limit {
            Some(0) | None => FEATURED_CAP,
            Some(n) => n.min(FEATURED_CAP),
        };

        self.query
            .featured(limit)
            .await
            .map_err(|e| FeaturedBlogsError::QueryError(e.to_string()))
    }
}
