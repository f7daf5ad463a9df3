pub mod about_store_postgres;
pub mod contact_settings_store_postgres;
pub mod sea_orm_entity;

pub use about_store_postgres::AboutStorePostgres;
pub use contact_settings_store_postgres::ContactSettingsStorePostgres;
