use crate::api::responses::{ApiResponse, VersionResponse};
use axum::{response::IntoResponse, Json};

pub(crate) async fn get_version() -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
