pub mod team_members {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "team_members")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub name: String,

        #[sea_orm(column_type = "Text")]
        pub title: String,

        #[sea_orm(column_type = "Text")]
        pub bio: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub image: Option<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub specialties: Json,

        #[sea_orm(column_type = "Text", nullable)]
        pub experience: Option<String>,

        pub order_index: i32,

        pub active: bool,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
