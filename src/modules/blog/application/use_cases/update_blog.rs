use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::blog::application::ports::outgoing::{
    BlogPatch, BlogRepository, BlogRepositoryError, BlogView,
};
use crate::shared::validation::{is_valid_slug, Violations};

// ========================= Update Blog Command =========================

/// Patch semantics: fields absent from the request body stay untouched.
/// Present fields are validated with the same rules as on create.
#[derive(Debug, Clone)]
pub struct UpdateBlogCommand {
    id: Uuid,
    patch: BlogPatch,
}

fn patch_text(
    v: &mut Violations,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim().to_string();
    if trimmed.is_empty() {
        v.add(field, &format!("{field} must not be empty"));
        return None;
    }
    if trimmed.chars().count() > max_len {
        v.add(field, &format!("{field} must be at most {max_len} characters"));
        return None;
    }
    Some(trimmed)
}

impl UpdateBlogCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
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

        let slug = slug.map(|s| s.trim().to_lowercase()).inspect(|s| {
            if !is_valid_slug(s) {
                v.add("slug", "slug must contain only lowercase letters, digits and hyphens");
            }
        });

        let date = date.and_then(|raw| {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    v.add("date", "date must be a date in YYYY-MM-DD format");
                    None
                }
            }
        });

        let patch = BlogPatch {
            title: patch_text(&mut v, "title", title, 150),
            slug,
            content: patch_text(&mut v, "content", content, 100_000),
            excerpt: patch_text(&mut v, "excerpt", excerpt, 500),
            date,
            author: patch_text(&mut v, "author", author, 100),
            read_time: patch_text(&mut v, "read_time", read_time, 50),
            category: patch_text(&mut v, "category", category, 100),
            published,
            featured,
            meta_description: patch_text(&mut v, "meta_description", meta_description, 255),
            keywords: patch_text(&mut v, "keywords", keywords, 255),
        };

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self { id, patch })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patch(&self) -> &BlogPatch {
        &self.patch
    }
}

// ========================= Update Blog Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateBlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Slug is already in use")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateBlogUseCase: Send + Sync {
    async fn execute(&self, command: UpdateBlogCommand) -> Result<BlogView, UpdateBlogError>;
}

#[derive(Debug, Clone)]
pub struct UpdateBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateBlogUseCase for UpdateBlogUseCase<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateBlogCommand) -> Result<BlogView, UpdateBlogError> {
        self.repository
            .update(command.id(), command.patch().clone())
            .await
            .map_err(|e| match e {
                BlogRepositoryError::NotFound => UpdateBlogError::NotFound,
                BlogRepositoryError::SlugTaken => UpdateBlogError::SlugTaken,
                other => UpdateBlogError::RepositoryError(other.to_string()),
            })
    }
}
