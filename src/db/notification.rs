use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::notification::{
    ActiveModel as NotificationActive, Column, Entity as Notification, Model as NotificationModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

/// Inserts a notification on any connection, so callers can make it part of
/// an open transaction.
pub(crate) async fn push_notification<C>(
    conn: &C,
    user_id: i32,
    message: String,
) -> Result<NotificationModel, DbErr>
where
    C: ConnectionTrait,
{
    NotificationActive {
        user_id: Set(user_id),
        message: Set(message),
        read: Set(false),
        date: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await
}

impl DatabaseService {
    pub async fn create_notification(
        &self,
        user_id: i32,
        message: String,
    ) -> Result<NotificationModel, AppError> {
        self.get_user_by_id(user_id).await?;
        Ok(push_notification(&self.database_connection, user_id, message).await?)
    }

    /// Newest first.
    pub async fn list_notifications_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<NotificationModel>, AppError> {
        Ok(Notification::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Only the owner can mark a notification; anyone else sees a 404.
    pub async fn mark_notification_read(
        &self,
        user_id: i32,
        notification_id: i32,
    ) -> Result<NotificationModel, AppError> {
        let notification = Notification::find_by_id(notification_id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Notification does not exist".into()))?;

        let mut am: NotificationActive = notification.into();
        am.read = Set(true);
        Ok(am.update(&self.database_connection).await?)
    }
}
