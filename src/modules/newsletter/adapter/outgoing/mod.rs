pub mod sea_orm_entity;
pub mod subscriber_repository_postgres;

pub use subscriber_repository_postgres::SubscriberRepositoryPostgres;
