pub mod blogs {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "blogs")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub title: String,

        #[sea_orm(column_type = "Text", unique)]
        pub slug: String,

        #[sea_orm(column_type = "Text")]
        pub content: String,

        #[sea_orm(column_type = "Text")]
        pub excerpt: String,

        pub date: Date,

        #[sea_orm(column_type = "Text")]
        pub author: String,

        #[sea_orm(column_type = "Text")]
        pub read_time: String,

        #[sea_orm(column_type = "Text")]
        pub category: String,

        pub views: i64,

        pub published: bool,

        pub featured: bool,

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
