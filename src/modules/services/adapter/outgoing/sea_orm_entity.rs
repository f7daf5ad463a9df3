pub mod services {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "services")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub title: String,

        #[sea_orm(column_type = "Text", unique)]
        pub slug: String,

        #[sea_orm(column_type = "Text")]
        pub description: String,

        #[sea_orm(column_type = "Text")]
        pub icon: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub link: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub gradient: Option<String>,

        pub order_index: i32,

        pub active: bool,

        pub views: i64,

        #[sea_orm(column_type = "Text", nullable)]
        pub overview: Option<String>,

        #[sea_orm(column_type = "JsonBinary")]
        pub features: Json,

        #[sea_orm(column_type = "JsonBinary")]
        pub process_steps: Json,

        #[sea_orm(column_type = "JsonBinary")]
        pub requirements: Json,

        #[sea_orm(column_type = "JsonBinary")]
        pub benefits: Json,

        #[sea_orm(column_type = "Text", nullable)]
        pub meta_description: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub keywords: Option<String>,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
