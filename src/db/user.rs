use crate::db::database_service::DatabaseService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, DBUserUpdate},
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::info;

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Login lookup: inactive accounts are treated as absent.
    pub async fn find_active_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .filter(Column::IsActive.eq(true))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }

        let user = UserActive {
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            gender: Set(payload.gender),
            age: Set(payload.age),
            photo: Set(payload.photo),
            biography: Set(payload.biography),
            created_at: Set(Utc::now()),
            is_active: Set(true),
            is_admin: Set(false),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;

        info!(user_id = user.id, "registered user");
        Ok(user)
    }

    /// Applies every present field of the patch; absent fields keep their value.
    pub async fn update_user(&self, user_id: i32, patch: DBUserUpdate) -> Result<UserModel, AppError> {
        let current = self.get_user_by_id(user_id).await?;

        if let Some(email) = &patch.email {
            if *email != current.email && self.user_exists_by_email(email).await? {
                return Err(AppError::AlreadyExists);
            }
        }

        let mut am: UserActive = current.into();
        if let Some(v) = patch.email { am.email = Set(v); }
        if let Some(v) = patch.password_hash { am.password_hash = Set(v); }
        if let Some(v) = patch.first_name { am.first_name = Set(Some(v)); }
        if let Some(v) = patch.last_name { am.last_name = Set(Some(v)); }
        if let Some(v) = patch.gender { am.gender = Set(Some(v)); }
        if let Some(v) = patch.age { am.age = Set(Some(v)); }
        if let Some(v) = patch.photo { am.photo = Set(Some(v)); }
        if let Some(v) = patch.biography { am.biography = Set(Some(v)); }

        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn set_user_active(&self, user_id: i32, active: bool) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.is_active = Set(active);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn set_user_admin(&self, user_id: i32, admin: bool) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.is_admin = Set(admin);
        Ok(am.update(&self.database_connection).await?)
    }

    /// Hosted trips, favorites, travels and notifications go with the user
    /// through the foreign-key cascades.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        let res = User::delete_by_id(user_id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
