pub mod blog_query;
pub mod blog_repository;

pub use blog_query::{BlogListFilter, BlogQuery, BlogQueryError, BlogSort, BlogView};
pub use blog_repository::{BlogPatch, BlogRepository, BlogRepositoryError, NewBlogData};
