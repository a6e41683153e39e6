use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Created(v) => HttpResponse::Created()
                .json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// `{ "message": ... }`
#[derive(Serialize)]
pub struct MessageRes {
    pub message: String,
}

/// `{ "message": ..., "results": ... }`, the envelope most routes answer with.
#[derive(Serialize)]
pub struct ResultsRes<T> {
    pub message: String,
    pub results: T,
}

impl<T> ResultsRes<T> {
    pub fn new(message: impl Into<String>, results: T) -> Self {
        Self { message: message.into(), results }
    }
}
