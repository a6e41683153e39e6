use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult, ResultsRes};
use crate::types::user::{DBUserUpdate, RUserUpdate};
use crate::utils::{password::hash_password, token::TokenKeys};
use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;
use std::sync::Arc;

/// Edits the caller's own profile. The target id comes from the token, never
/// from the request.
#[put("")]
pub async fn edit_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    keys: web::Data<TokenKeys>,
    auth: BearerAuth,
    body: web::Json<RUserUpdate>,
) -> ApiResult<ResultsRes<UserModel>> {
    let claims = keys.validate(auth.token())?;

    let body = body.into_inner();
    let gender = body.validate()?;
    let password_hash = body.password.as_deref().map(hash_password).transpose()?;

    let user = db
        .update_user(
            claims.user_id,
            DBUserUpdate {
                email: body.email.map(|e| e.trim().to_string()),
                password_hash,
                first_name: body.first_name,
                last_name: body.last_name,
                gender,
                age: body.age,
                photo: body.photo,
                biography: body.biography,
            },
        )
        .await?;

    Ok(ApiResponse::Ok(ResultsRes::new("User updated successfully", user)))
}
