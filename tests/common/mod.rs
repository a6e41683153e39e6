#![allow(dead_code)]

use std::sync::Arc;
use trip_share::config::{EnvConfig, JwtConfig};
use trip_share::db::database_service::DatabaseService;
use trip_share::utils::token::TokenKeys;

pub mod client;

/// A fresh in-memory database with every migration applied.
pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub keys: TokenKeys,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let config = get_test_config();

        let db = Arc::new(
            DatabaseService::new(&config.db_url)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            keys: TokenKeys::new(&config.jwt),
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        jwt: JwtConfig {
            secret: "test_jwt_secret".to_string(),
            ttl_minutes: 15,
        },
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_trip() -> Value {
        json!({
            "destination": "Lisbon",
            "start_date": "2025-07-01T00:00:00Z",
            "end_date": "2025-07-10T00:00:00Z",
            "available_seats": 3,
            "description": "A week of tiles and pastries",
            "photo": null,
            "budget": 900,
            "budget_currency": "EUR",
            "age_min": 21,
            "age_max": 40,
            "status": "planning"
        })
    }

    pub fn sample_trip_with_seats(seats: i32) -> Value {
        let mut trip = sample_trip();
        trip["available_seats"] = json!(seats);
        trip
    }
}
