use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister};
use crate::utils::{password::hash_password, token::TokenKeys};
use actix_web::{post, web};
use entity::user::Model as UserModel;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub results: UserModel,
    pub access_token: String,
}

#[post("/register")]
pub async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    body: web::Json<RUserRegister>,
) -> ApiResult<Response> {
    let body = body.into_inner();
    let gender = body.validate()?;
    let password_hash = hash_password(&body.password)?;

    let user = db
        .create_user(DBUserCreate {
            email: body.email.trim().to_string(),
            password_hash,
            first_name: body.first_name,
            last_name: body.last_name,
            gender,
            age: body.age,
            photo: body.photo,
            biography: body.biography,
        })
        .await?;

    let access_token = keys.issue(&user)?;

    Ok(ApiResponse::Ok(Response {
        message: "User registered successfully".to_string(),
        results: user,
        access_token,
    }))
}
