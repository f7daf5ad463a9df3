use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{Column, Entity as UserEntity, Model as UserModel};
use crate::modules::auth::application::{
    domain::entities::User,
    ports::outgoing::{UserQuery, UserQueryError},
};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_user(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        role: model.role,
        failed_login_count: model.failed_login_count,
        locked_until: model.locked_until.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let found = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(model_to_user))
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let found = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(model_to_user))
    }
}
