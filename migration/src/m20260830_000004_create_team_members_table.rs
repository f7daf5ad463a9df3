use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamMembers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeamMembers::Name).text().not_null())
                    .col(ColumnDef::new(TeamMembers::Title).text().not_null())
                    .col(ColumnDef::new(TeamMembers::Bio).text().not_null())
                    .col(ColumnDef::new(TeamMembers::Image).text())
                    .col(
                        ColumnDef::new(TeamMembers::Specialties)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeamMembers::Experience).text())
                    .col(
                        ColumnDef::new(TeamMembers::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::UpdatedAt)
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
                    .name("idx_team_members_active_order")
                    .table(TeamMembers::Table)
                    .col(TeamMembers::Active)
                    .col(TeamMembers::OrderIndex)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Image,
    Specialties,
    Experience,
    OrderIndex,
    Active,
    CreatedAt,
    UpdatedAt,
}
