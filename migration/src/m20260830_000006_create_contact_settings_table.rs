use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactSettings::Email).text().not_null())
                    .col(ColumnDef::new(ContactSettings::Phone).text().not_null())
                    .col(ColumnDef::new(ContactSettings::Whatsapp).text())
                    .col(ColumnDef::new(ContactSettings::Address).text().not_null())
                    .col(ColumnDef::new(ContactSettings::MapEmbed).text())
                    .col(ColumnDef::new(ContactSettings::OfficeHours).text())
                    .col(
                        ColumnDef::new(ContactSettings::UpdatedAt)
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
            .drop_table(Table::drop().table(ContactSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactSettings {
    Table,
    Id,
    Email,
    Phone,
    Whatsapp,
    Address,
    MapEmbed,
    OfficeHours,
    UpdatedAt,
}
