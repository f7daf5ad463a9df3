use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactInquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactInquiries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactInquiries::Name).text().not_null())
                    .col(ColumnDef::new(ContactInquiries::Email).text().not_null())
                    .col(ColumnDef::new(ContactInquiries::Phone).text())
                    .col(ColumnDef::new(ContactInquiries::Subject).text().not_null())
                    .col(ColumnDef::new(ContactInquiries::Message).text().not_null())
                    .col(ColumnDef::new(ContactInquiries::IpAddress).text())
                    .col(ColumnDef::new(ContactInquiries::UserAgent).text())
                    .col(
                        ColumnDef::new(ContactInquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin inbox reads newest first.
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_inquiries_created_at")
                    .table(ContactInquiries::Table)
                    .col(ContactInquiries::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactInquiries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactInquiries {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    IpAddress,
    UserAgent,
    CreatedAt,
}
