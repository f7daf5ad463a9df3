pub mod sea_orm_entity;
pub mod team_query_postgres;
pub mod team_repository_postgres;

pub use team_query_postgres::TeamQueryPostgres;
pub use team_repository_postgres::TeamRepositoryPostgres;
