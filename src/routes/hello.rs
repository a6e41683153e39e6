use actix_web::route;

use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[route("/hello", method = "GET", method = "POST")]
pub async fn hello(
    _req: actix_web::HttpRequest
) -> ApiResult<MessageRes> {
    Ok(ApiResponse::Ok(MessageRes {
        message: "Hello! I'm a message that came from the backend.".to_string(),
    }))
}
