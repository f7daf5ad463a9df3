use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Services::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Services::Title).text().not_null())
                    .col(
                        ColumnDef::new(Services::Slug)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Icon).text().not_null())
                    .col(ColumnDef::new(Services::Link).text())
                    .col(ColumnDef::new(Services::Gradient).text())
                    .col(
                        ColumnDef::new(Services::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Services::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Services::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Services::Overview).text())
                    .col(ColumnDef::new(Services::Features).json_binary().not_null())
                    .col(
                        ColumnDef::new(Services::ProcessSteps)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::Requirements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Services::Benefits).json_binary().not_null())
                    .col(ColumnDef::new(Services::MetaDescription).text())
                    .col(ColumnDef::new(Services::Keywords).text())
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Services::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_services_active_order")
                    .table(Services::Table)
                    .col(Services::Active)
                    .col(Services::OrderIndex)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Icon,
    Link,
    Gradient,
    OrderIndex,
    Active,
    Views,
    Overview,
    Features,
    ProcessSteps,
    Requirements,
    Benefits,
    MetaDescription,
    Keywords,
    CreatedAt,
    UpdatedAt,
}
