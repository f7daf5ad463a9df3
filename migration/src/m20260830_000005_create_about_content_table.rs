use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AboutContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutContent::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AboutContent::Intro).text().not_null())
                    .col(ColumnDef::new(AboutContent::WhoWeAre).text().not_null())
                    .col(ColumnDef::new(AboutContent::Vision).text().not_null())
                    .col(ColumnDef::new(AboutContent::Mission).text().not_null())
                    .col(
                        ColumnDef::new(AboutContent::CompanyValues)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AboutContent::ImpactStats)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AboutContent::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AboutContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AboutContent {
    Table,
    Id,
    Intro,
    WhoWeAre,
    Vision,
    Mission,
    CompanyValues,
    ImpactStats,
    UpdatedAt,
}
