//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct DataBody<T> {
    pub message: String,
    pub data: T,
}

pub fn message(status: StatusCode, text: &str) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: text.to_string(),
        }),
    )
}

pub fn with_data<T: Serialize>(text: &str, data: T) -> (StatusCode, Json<DataBody<T>>) {
    (
        StatusCode::OK,
        Json(DataBody {
            message: text.to_string(),
            data,
        }),
    )
}
