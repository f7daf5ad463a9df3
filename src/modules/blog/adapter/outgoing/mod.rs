pub mod blog_query_postgres;
pub mod blog_repository_postgres;
pub mod sea_orm_entity;

pub use blog_query_postgres::BlogQueryPostgres;
pub use blog_repository_postgres::BlogRepositoryPostgres;
