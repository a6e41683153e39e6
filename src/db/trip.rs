use crate::db::database_service::DatabaseService;
use crate::types::{
    error::AppError,
    trip::{DBTripCreate, DBTripUpdate},
};
use entity::trip::{ActiveModel as TripActive, Column, Entity as Trip, Model as TripModel};
use entity::{favorite, traveler};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

impl DatabaseService {
    pub async fn create_trip(&self, host_id: i32, payload: DBTripCreate) -> Result<TripModel, AppError> {
        // Surface a missing host as 404 rather than a constraint error.
        self.get_user_by_id(host_id).await?;

        let trip = TripActive {
            host_id: Set(host_id),
            destination: Set(payload.destination),
            start_date: Set(payload.start_date),
            end_date: Set(payload.end_date),
            available_seats: Set(payload.available_seats),
            description: Set(payload.description),
            photo: Set(payload.photo),
            budget: Set(payload.budget),
            budget_currency: Set(payload.budget_currency),
            age_min: Set(payload.age_min),
            age_max: Set(payload.age_max),
            status: Set(payload.status),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;

        info!(trip_id = trip.id, host_id, "created trip");
        Ok(trip)
    }

    pub async fn get_trip(&self, id: i32) -> Result<TripModel, AppError> {
        Ok(Trip::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Trip does not exist".into()))?)
    }

    pub async fn list_trips(&self) -> Result<Vec<TripModel>, AppError> {
        Ok(Trip::find()
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_trips_for_host(&self, host_id: i32) -> Result<Vec<TripModel>, AppError> {
        Ok(Trip::find()
            .filter(Column::HostId.eq(host_id))
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn update_trip(&self, trip: TripModel, patch: DBTripUpdate) -> Result<TripModel, AppError> {
        let mut am: TripActive = trip.into();
        if let Some(v) = patch.destination { am.destination = Set(v); }
        if let Some(v) = patch.start_date { am.start_date = Set(v); }
        if let Some(v) = patch.end_date { am.end_date = Set(v); }
        if let Some(v) = patch.available_seats { am.available_seats = Set(Some(v)); }
        if let Some(v) = patch.description { am.description = Set(v); }
        if let Some(v) = patch.photo { am.photo = Set(Some(v)); }
        if let Some(v) = patch.budget { am.budget = Set(v); }
        if let Some(v) = patch.budget_currency { am.budget_currency = Set(v); }
        if let Some(v) = patch.age_min { am.age_min = Set(Some(v)); }
        if let Some(v) = patch.age_max { am.age_max = Set(Some(v)); }
        if let Some(v) = patch.status { am.status = Set(v); }

        Ok(am.update(&self.database_connection).await?)
    }

    /// Removes the trip together with its favorites and traveler rows.
    pub async fn delete_trip(&self, trip_id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        favorite::Entity::delete_many()
            .filter(favorite::Column::TripId.eq(trip_id))
            .exec(&txn)
            .await?;
        traveler::Entity::delete_many()
            .filter(traveler::Column::TripId.eq(trip_id))
            .exec(&txn)
            .await?;

        let res = Trip::delete_by_id(trip_id).exec(&txn).await?;
        if res.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        txn.commit().await?;
        info!(trip_id, "deleted trip");
        Ok(())
    }
}
