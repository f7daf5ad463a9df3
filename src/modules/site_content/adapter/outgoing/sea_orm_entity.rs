pub mod about_content {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "about_content")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub intro: String,

        #[sea_orm(column_type = "Text")]
        pub who_we_are: String,

        #[sea_orm(column_type = "Text")]
        pub vision: String,

        #[sea_orm(column_type = "Text")]
        pub mission: String,

        #[sea_orm(column_type = "JsonBinary")]
        pub company_values: Json,

        #[sea_orm(column_type = "JsonBinary")]
        pub impact_stats: Json,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod contact_settings {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "contact_settings")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text")]
        pub email: String,

        #[sea_orm(column_type = "Text")]
        pub phone: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub whatsapp: Option<String>,

        #[sea_orm(column_type = "Text")]
        pub address: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub map_embed: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub office_hours: Option<String>,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
