use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Blogs::Title).text().not_null())
                    .col(ColumnDef::new(Blogs::Slug).text().not_null().unique_key())
                    .col(ColumnDef::new(Blogs::Content).text().not_null())
                    .col(ColumnDef::new(Blogs::Excerpt).text().not_null())
                    .col(ColumnDef::new(Blogs::Date).date().not_null())
                    .col(ColumnDef::new(Blogs::Author).text().not_null())
                    .col(ColumnDef::new(Blogs::ReadTime).text().not_null())
                    .col(ColumnDef::new(Blogs::Category).text().not_null())
                    .col(
                        ColumnDef::new(Blogs::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Blogs::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Blogs::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Blogs::MetaDescription).text())
                    .col(ColumnDef::new(Blogs::Keywords).text())
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public listing filters on these two together.
        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_published_date")
                    .table(Blogs::Table)
                    .col(Blogs::Published)
                    .col(Blogs::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_category")
                    .table(Blogs::Table)
                    .col(Blogs::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Excerpt,
    Date,
    Author,
    ReadTime,
    Category,
    Views,
    Published,
    Featured,
    MetaDescription,
    Keywords,
    CreatedAt,
    UpdatedAt,
}
