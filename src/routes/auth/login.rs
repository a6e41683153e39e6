use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserLogin;
use crate::utils::{password::verify_password, token::TokenKeys};
use actix_web::{post, web};
use entity::user::Model as UserModel;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub access_token: String,
    pub results: UserModel,
}

/// Unknown email, wrong password and deactivated account all answer the same
/// 401.
#[post("/login")]
pub async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    body: web::Json<RUserLogin>,
) -> ApiResult<Response> {
    let user = match db.find_active_user_by_email(body.email.trim()).await? {
        Some(user) if verify_password(&body.password, &user.password_hash) => user,
        _ => {
            warn!("rejected login attempt");
            return Err(AppError::Unauthorized);
        }
    };

    let access_token = keys.issue(&user)?;

    Ok(ApiResponse::Ok(Response {
        message: "Login successful".to_string(),
        access_token,
        results: user,
    }))
}
