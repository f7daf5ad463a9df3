pub use sea_orm_migration::prelude::*;

mod m20260830_000001_create_users_table;
mod m20260830_000002_create_blogs_table;
mod m20260830_000003_create_services_table;
mod m20260830_000004_create_team_members_table;
mod m20260830_000005_create_about_content_table;
mod m20260830_000006_create_contact_settings_table;
mod m20260830_000007_create_contact_inquiries_table;
mod m20260830_000008_create_subscribers_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_create_users_table::Migration),
            Box::new(m20260830_000002_create_blogs_table::Migration),
            Box::new(m20260830_000003_create_services_table::Migration),
            Box::new(m20260830_000004_create_team_members_table::Migration),
            Box::new(m20260830_000005_create_about_content_table::Migration),
            Box::new(m20260830_000006_create_contact_settings_table::Migration),
            Box::new(m20260830_000007_create_contact_inquiries_table::Migration),
            Box::new(m20260830_000008_create_subscribers_table::Migration),
        ]
    }
}
