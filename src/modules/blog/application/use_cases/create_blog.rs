use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::blog::application::ports::outgoing::{
    BlogRepository, BlogRepositoryError, BlogView, NewBlogData,
};
use crate::shared::validation::{optional_text, required_slug, required_text, Violations};

// ========================= Create Blog Command =========================

#[derive(Debug, Clone)]
pub struct CreateBlogCommand {
    data: NewBlogData,
}

fn parse_date(v: &mut Violations, field: &str, value: Option<String>) -> NaiveDate {
    let raw = required_text(v, field, value, 20);
    if raw.is_empty() {
        return NaiveDate::default();
    }
    match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            v.add(field, &format!("{field} must be a date in YYYY-MM-DD format"));
            NaiveDate::default()
        }
    }
}

impl CreateBlogCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: Option<String>,
        slug: Option<String>,
        content: Option<String>,
        excerpt: Option<String>,
        date: Option<String>,
        author: Option<String>,
        read_time: Option<String>,
        category: Option<String>,
        published: Option<bool>,
        featured: Option<bool>,
        meta_description: Option<String>,
        keywords: Option<String>,
    ) -> Result<Self, Violations> {
        let mut v = Violations::new();

        let title = required_text(&mut v, "title", title, 150);
        let slug = required_slug(&mut v, "slug", slug);
        let content = required_text(&mut v, "content", content, 100_000);
        let excerpt = required_text(&mut v, "excerpt", excerpt, 500);
        let date = parse_date(&mut v, "date", date);
        let author = required_text(&mut v, "author", author, 100);
        let read_time = required_text(&mut v, "read_time", read_time, 50);
        let category = required_text(&mut v, "category", category, 100);
        let meta_description = optional_text(&mut v, "meta_description", meta_description, 255);
        let keywords = optional_text(&mut v, "keywords", keywords, 255);

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self {
            data: NewBlogData {
                title,
                slug,
                content,
                excerpt,
                date,
                author,
                read_time,
                category,
                published: published.unwrap_or(false),
                featured: featured.unwrap_or(false),
                meta_description,
                keywords,
            },
        })
    }

    pub fn data(&self) -> &NewBlogData {
        &self.data
    }
}

// ========================= Create Blog Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBlogError {
    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateBlogUseCase: Send + Sync {
    async fn execute(&self, command: CreateBlogCommand) -> Result<BlogView, CreateBlogError>;
}

#[derive(Debug, Clone)]
pub struct CreateBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateBlogUseCase for CreateBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, command: CreateBlogCommand) -> Result<BlogView, CreateBlogError> {
        self.repository
            .create(command.data().clone())
            .await
            .map_err(|e| match e {
                BlogRepositoryError::SlugTaken => CreateBlogError::SlugTaken,
                other => CreateBlogError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    pub(crate) fn sample_view(slug: &str, published: bool) -> BlogView {
        BlogView {
            id: Uuid::new_v4(),
            title: "Understanding Mining Concessions".to_string(),
            slug: slug.to_string(),
            content: "Long-form content".to_string(),
            excerpt: "A primer on concessions".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            author: "Jane Doe".to_string(),
            read_time: "8 min".to_string(),
            category: "Mining Law".to_string(),
            views: 0,
            published,
            featured: false,
            meta_description: None,
            keywords: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn valid_command() -> CreateBlogCommand {
        CreateBlogCommand::new(
            Some("Understanding Mining Concessions".to_string()),
            Some("understanding-mining-concessions".to_string()),
            Some("Long-form content".to_string()),
            Some("A primer on concessions".to_string()),
            Some("2026-03-14".to_string()),
            Some("Jane Doe".to_string()),
            Some("8 min".to_string()),
            Some("Mining Law".to_string()),
            Some(true),
            None,
            None,
            None,
        )
        .unwrap()
    }

    // ==================== Command validation ====================

    #[test]
    fn missing_fields_are_all_reported() {
        let result = CreateBlogCommand::new(
            None,
            None,
            Some("content".to_string()),
            None,
            Some("2026-03-14".to_string()),
            Some("Jane".to_string()),
            Some("5 min".to_string()),
            Some("Tax Law".to_string()),
            None,
            None,
            None,
            None,
        );

        let v = result.unwrap_err();
        assert_eq!(v.fields(), vec!["title", "slug", "excerpt"]);
    }

    #[test]
    fn bad_date_format_is_a_field_violation() {
        let result = CreateBlogCommand::new(
            Some("Title".to_string()),
            Some("title".to_string()),
            Some("content".to_string()),
            Some("excerpt".to_string()),
            Some("14/03/2026".to_string()),
            Some("Jane".to_string()),
            Some("5 min".to_string()),
            Some("Tax Law".to_string()),
            None,
            None,
            None,
            None,
        );

        assert_eq!(result.unwrap_err().fields(), vec!["date"]);
    }

    #[test]
    fn flags_default_to_false() {
        let command = valid_command();
        assert!(command.data().published);

        let command = CreateBlogCommand::new(
            Some("T".to_string()),
            Some("t".to_string()),
            Some("c".to_string()),
            Some("e".to_string()),
            Some("2026-01-01".to_string()),
            Some("a".to_string()),
            Some("1 min".to_string()),
            Some("News".to_string()),
            None,
            None,
            None,
            None,
        )
        .unwrap();
        assert!(!command.data().published);
        assert!(!command.data().featured);
    }

    // ==================== Use case ====================

    struct MockBlogRepository {
        result: Result<BlogView, BlogRepositoryError>,
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepository {
        async fn create(&self, _data: NewBlogData) -> Result<BlogView, BlogRepositoryError> {
            self.result.clone()
        }

        async fn update(
            &self,
            _id: Uuid,
            _patch: crate::modules::blog::application::ports::outgoing::BlogPatch,
        ) -> Result<BlogView, BlogRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), BlogRepositoryError> {
            unimplemented!()
        }

        async fn increment_views(&self, _id: Uuid) -> Result<(), BlogRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn create_success_returns_row() {
        let view = sample_view("understanding-mining-concessions", true);
        let use_case = CreateBlogUseCase::new(MockBlogRepository {
            result: Ok(view.clone()),
        });

        let created = use_case.execute(valid_command()).await.unwrap();
        assert_eq!(created.slug, view.slug);
    }

    #[tokio::test]
    async fn duplicate_slug_is_mapped() {
        let use_case = CreateBlogUseCase::new(MockBlogRepository {
            result: Err(BlogRepositoryError::SlugTaken),
        });

        let result = use_case.execute(valid_command()).await;
        assert!(matches!(result, Err(CreateBlogError::SlugTaken)));
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let use_case = CreateBlogUseCase::new(MockBlogRepository {
            result: Err(BlogRepositoryError::DatabaseError("down".to_string())),
        });

        let result = use_case.execute(valid_command()).await;
        assert!(matches!(result, Err(CreateBlogError::RepositoryError(_))));
    }
}
