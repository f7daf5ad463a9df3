pub mod subscribers {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "subscribers")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text", unique)]
        pub email: String,

        pub active: bool,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub subscribed_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
        pub unsubscribed_at: Option<DateTimeWithTimeZone>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
