use actix_web::{web, App};
use entity::trip::Model as TripModel;
use entity::user::Model as UserModel;
use std::sync::Arc;
use trip_share::{
    db::database_service::DatabaseService,
    types::{error::AppError, trip::{DBTripCreate, RTripCreate}, user::DBUserCreate},
    utils::{password::hash_password, token::TokenKeys},
};

use super::test_data;

pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub keys: TokenKeys,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>, keys: TokenKeys) -> Self {
        TestClient { db, keys }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.keys.clone()))
            .configure(trip_share::routes::configure_routes)
    }

    /// Inserts a user straight into the database and mints a token for it.
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(UserModel, String), AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", next_suffix()));

        let user = self.db.create_user(DBUserCreate {
            email,
            password_hash: hash_password(TEST_PASSWORD)?,
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            gender: None,
            age: Some(30),
            photo: None,
            biography: None,
        }).await?;

        let access_token = self.keys.issue(&user)?;

        Ok((user, access_token))
    }

    pub async fn create_test_admin(&self) -> (UserModel, String) {
        let (user, _) = self.create_test_user(None).await.expect("Failed to create admin");
        let admin = self.db.set_user_admin(user.id, true).await.expect("Failed to promote admin");
        let access_token = self.keys.issue(&admin).expect("Failed to issue token");
        (admin, access_token)
    }

    pub async fn create_test_trip(&self, host_id: i32) -> TripModel {
        self.create_test_trip_from(host_id, test_data::sample_trip()).await
    }

    pub async fn create_test_trip_from(&self, host_id: i32, body: serde_json::Value) -> TripModel {
        let request: RTripCreate = serde_json::from_value(body).expect("Bad trip fixture");
        let payload = DBTripCreate::try_from(request).expect("Invalid trip fixture");
        self.db.create_trip(host_id, payload).await.expect("Failed to create trip")
    }
}

fn next_suffix() -> usize {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
