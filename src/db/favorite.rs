use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use entity::favorite::{ActiveModel as FavoriteActive, Column, Entity as Favorite, Model as FavoriteModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl DatabaseService {
    pub async fn is_favorite(&self, user_id: i32, trip_id: i32) -> Result<bool, AppError> {
        Ok(Favorite::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::TripId.eq(trip_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn add_favorite(&self, user_id: i32, trip_id: i32) -> Result<FavoriteModel, AppError> {
        self.get_trip(trip_id).await?;
        if self.is_favorite(user_id, trip_id).await? {
            return Err(AppError::AlreadyExists);
        }

        // The unique index still backs this up if two requests race.
        Ok(FavoriteActive {
            trip_id: Set(trip_id),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn list_favorites_for_user(&self, user_id: i32) -> Result<Vec<FavoriteModel>, AppError> {
        Ok(Favorite::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn remove_favorite(&self, user_id: i32, trip_id: i32) -> Result<(), AppError> {
        let res = Favorite::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::TripId.eq(trip_id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
