pub mod create_blog;
pub mod delete_blog;
pub mod featured_blogs;
pub mod get_blog;
pub mod list_blogs;
pub mod read_published_blog;
pub mod update_blog;
