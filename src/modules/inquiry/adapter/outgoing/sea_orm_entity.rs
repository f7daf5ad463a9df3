pub mod contact_inquiries {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "contact_inquiries")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub name: String,

        #[sea_orm(column_type = "Text")]
        pub email: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub phone: Option<String>,

        #[sea_orm(column_type = "Text")]
        pub subject: String,

        #[sea_orm(column_type = "Text")]
        pub message: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub ip_address: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub user_agent: Option<String>,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
