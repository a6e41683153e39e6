use crate::db::{database_service::DatabaseService, notification::push_notification};
use crate::types::error::AppError;
use chrono::Utc;
use entity::traveler::{
    ActiveModel as TravelerActive, Column, Entity as Traveler, Model as TravelerModel,
    TravelerStatus,
};
use entity::trip::Model as TripModel;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;

/// Pending requests can go anywhere; an approved seat can still be declined
/// by the host or given up by the traveler. Declined and cancelled are final.
fn transition_allowed(from: TravelerStatus, to: TravelerStatus) -> bool {
    use TravelerStatus::*;
    matches!(
        (from, to),
        (Pending, Approved | Declined | Cancelled) | (Approved, Declined | Cancelled)
    )
}

impl DatabaseService {
    pub async fn get_traveler(&self, id: i32) -> Result<TravelerModel, AppError> {
        Ok(Traveler::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Traveler does not exist".into()))?)
    }

    pub async fn list_travelers_for_trip(&self, trip_id: i32) -> Result<Vec<TravelerModel>, AppError> {
        self.get_trip(trip_id).await?;
        Ok(Traveler::find()
            .filter(Column::TripId.eq(trip_id))
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn has_open_request(&self, trip_id: i32, user_id: i32) -> Result<bool, AppError> {
        Ok(Traveler::find()
            .filter(Column::TripId.eq(trip_id))
            .filter(Column::TravelerId.eq(user_id))
            .filter(Column::Status.is_in([TravelerStatus::Pending, TravelerStatus::Approved]))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Files a pending request to join `trip` and tells the host about it.
    pub async fn request_to_join(&self, trip: &TripModel, user_id: i32) -> Result<TravelerModel, AppError> {
        if trip.host_id == user_id {
            return Err(AppError::BadRequest("Hosts cannot join their own trip".to_string()));
        }
        if self.has_open_request(trip.id, user_id).await? {
            return Err(AppError::AlreadyExists);
        }

        let txn = self.database_connection.begin().await?;

        let traveler = TravelerActive {
            trip_id: Set(trip.id),
            traveler_id: Set(user_id),
            status: Set(TravelerStatus::Pending),
            created_at: Set(Utc::now()),
            approved_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        push_notification(
            &txn,
            trip.host_id,
            format!("A traveler asked to join your trip to {}.", trip.destination),
        )
        .await?;

        txn.commit().await?;
        info!(trip_id = trip.id, user_id, "join request filed");
        Ok(traveler)
    }

    /// Moves a traveler row to `status` and notifies the other party.
    ///
    /// `approved_at` is stamped on the transition into `Approved` and cleared
    /// on any transition out of it. Approving needs a free seat when the trip
    /// has a seat limit and no other open request from the same traveler.
    /// Leaving `Declined` or `Cancelled` is a `Conflict`.
    pub async fn set_traveler_status(
        &self,
        trip: &TripModel,
        traveler: TravelerModel,
        status: TravelerStatus,
    ) -> Result<TravelerModel, AppError> {
        if traveler.status == status {
            return Ok(traveler);
        }
        if !transition_allowed(traveler.status, status) {
            return Err(AppError::Conflict(format!(
                "Request is already {}",
                traveler.status.to_value()
            )));
        }

        let txn = self.database_connection.begin().await?;

        if status == TravelerStatus::Approved {
            let other_open = Traveler::find()
                .filter(Column::TripId.eq(trip.id))
                .filter(Column::TravelerId.eq(traveler.traveler_id))
                .filter(Column::Id.ne(traveler.id))
                .filter(Column::Status.is_in([TravelerStatus::Pending, TravelerStatus::Approved]))
                .count(&txn)
                .await?;
            if other_open > 0 {
                txn.rollback().await?;
                return Err(AppError::Conflict(
                    "Traveler already holds another request on this trip".to_string(),
                ));
            }

            if let Some(seats) = trip.available_seats {
                let taken = Traveler::find()
                    .filter(Column::TripId.eq(trip.id))
                    .filter(Column::Status.eq(TravelerStatus::Approved))
                    .count(&txn)
                    .await?;
                if taken >= u64::try_from(seats).unwrap_or(0) {
                    txn.rollback().await?;
                    return Err(AppError::Conflict("No seats left on this trip".to_string()));
                }
            }
        }

        let traveler_id = traveler.traveler_id;
        let mut am: TravelerActive = traveler.into();
        am.status = Set(status);
        am.approved_at = Set(match status {
            TravelerStatus::Approved => Some(Utc::now()),
            _ => None,
        });
        let updated = am.update(&txn).await?;

        let (recipient, message) = match status {
            TravelerStatus::Cancelled => (
                trip.host_id,
                format!("A traveler cancelled their trip to {}.", trip.destination),
            ),
            other => (
                traveler_id,
                format!(
                    "Your request to join the trip to {} was {}.",
                    trip.destination,
                    other.to_value()
                ),
            ),
        };
        push_notification(&txn, recipient, message).await?;

        txn.commit().await?;
        info!(traveler = updated.id, status = %updated.status.to_value(), "traveler status changed");
        Ok(updated)
    }
}
