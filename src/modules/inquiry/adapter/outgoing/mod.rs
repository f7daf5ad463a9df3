pub mod inquiry_repository_postgres;
pub mod sea_orm_entity;

pub use inquiry_repository_postgres::InquiryRepositoryPostgres;
