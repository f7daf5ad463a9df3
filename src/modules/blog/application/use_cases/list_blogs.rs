use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::{
    BlogListFilter, BlogQuery, BlogSort, BlogView,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ========================= List Blogs Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBlogsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListBlogsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> Result<PageResult<BlogView>, ListBlogsError>;
}

#[derive(Debug, Clone)]
pub struct ListBlogsUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListBlogsUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListBlogsUseCase for ListBlogsUseCase<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: BlogListFilter,
        sort: BlogSort,
        page: PageRequest,
    ) -> Result<PageResult<BlogView>, ListBlogsError> {
        self.query
            .list(filter, sort, page)
            .await
            .map_err(|e| ListBlogsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::application::ports::outgoing::BlogQueryError;
    use crate::modules::blog::application::use_cases::create_blog::tests::sample_view;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MockBlogQuery {
        rows: Vec<BlogView>,
        seen_filter: Mutex<Option<BlogListFilter>>,
    }

    impl MockBlogQuery {
        fn with_rows(rows: Vec<BlogView>) -> Self {
            Self {
                rows,
                seen_filter: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl BlogQuery for MockBlogQuery {
        async fn list(
            &self,
            filter: BlogListFilter,
            _sort: BlogSort,
            page: PageRequest,
        ) -> Result<PageResult<BlogView>, BlogQueryError> {
            *self.seen_filter.lock().unwrap() = Some(filter);
            Ok(PageResult {
                total: self.rows.len() as u64,
                items: self.rows.clone(),
                page: page.page(),
                per_page: page.per_page(),
            })
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<BlogView, BlogQueryError> {
            unimplemented!()
        }

        async fn get_published_by_slug(&self, _slug: &str) -> Result<BlogView, BlogQueryError> {
            unimplemented!()
        }

        async fn featured(&self, _limit: u64) -> Result<Vec<BlogView>, BlogQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn passes_filter_through_and_returns_page() {
        let query = MockBlogQuery::with_rows(vec![sample_view("first-post", true)]);
        let use_case = ListBlogsUseCase::new(query);

        let filter = BlogListFilter {
            published: Some(true),
            category: Some("Mining Law".to_string()),
            ..Default::default()
        };
        let result = use_case
            .execute(filter, BlogSort::DateDesc, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].slug, "first-post");
        let seen = use_case.query.seen_filter.lock().unwrap().take().unwrap();
        assert_eq!(seen.published, Some(true));
        assert_eq!(seen.category.as_deref(), Some("Mining Law"));
    }

    struct FailingQuery;

    #[async_trait]
    impl BlogQuery for FailingQuery {
        async fn list(
            &self,
            _filter: BlogListFilter,
            _sort: BlogSort,
            _page: PageRequest,
        ) -> Result<PageResult<BlogView>, BlogQueryError> {
            Err(BlogQueryError::DatabaseError("down".to_string()))
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<BlogView, BlogQueryError> {
            unimplemented!()
        }

        async fn get_published_by_slug(&self, _slug: &str) -> Result<BlogView, BlogQueryError> {
            unimplemented!()
        }

        async fn featured(&self, _limit: u64) -> Result<Vec<BlogView>, BlogQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let use_case = ListBlogsUseCase::new(FailingQuery);

        let result = use_case
            .execute(
                BlogListFilter::default(),
                BlogSort::default(),
                PageRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(ListBlogsError::QueryError(_))));
    }
}
