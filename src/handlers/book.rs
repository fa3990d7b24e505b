//! Book handlers: create, list, get by id, delete by id.

use crate::error::{AppError, StoreError};
use crate::model::NewBook;
use crate::response::{message, with_data};
use crate::state::AppState;
use crate::store::parse_id;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

const GET_FAILED: &str = "cannot get book";
const DELETE_FAILED: &str = "cannot delete book";

/// Empty ids get their own error; malformed ids fail like a store error.
fn path_id(raw: &str, failure: &'static str) -> Result<i64, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::EmptyId);
    }
    parse_id(raw).map_err(AppError::store(failure))
}

/// Undecodable segments (e.g. invalid UTF-8) fail like a malformed id.
fn raw_segment(
    path: Result<Path<String>, PathRejection>,
    failure: &'static str,
) -> Result<String, AppError> {
    path.map(|Path(id)| id).map_err(|rejection| AppError::Store {
        message: failure,
        source: StoreError::InvalidInput(rejection.body_text()),
    })
}

pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<Option<NewBook>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A literal `null` body creates an empty book.
    let Json(book) = payload.map_err(|rejection| AppError::Unprocessable {
        message: "request failed",
        detail: rejection.body_text(),
    })?;
    let created = state
        .books
        .create(book.unwrap_or_default())
        .await
        .map_err(AppError::store("could not create book"))?;
    tracing::info!(id = created.id, "book created");
    Ok(with_data("book has been added", created))
}

pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state
        .books
        .list_all()
        .await
        .map_err(AppError::store("could not get the books"))?;
    Ok(with_data("books fetched successfully", books))
}

pub async fn get_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = raw_segment(path, GET_FAILED)?;
    fetch_book(&state, &id).await
}

pub async fn get_book_without_id(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    fetch_book(&state, "").await
}

async fn fetch_book(state: &AppState, raw_id: &str) -> Result<impl IntoResponse, AppError> {
    let id = path_id(raw_id, GET_FAILED)?;
    let book = state
        .books
        .find_by_id(id)
        .await
        .map_err(AppError::store(GET_FAILED))?;
    Ok(with_data("book id fetched successfully", book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = raw_segment(path, DELETE_FAILED)?;
    remove_book(&state, &id).await
}

pub async fn delete_book_without_id(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    remove_book(&state, "").await
}

async fn remove_book(state: &AppState, raw_id: &str) -> Result<impl IntoResponse, AppError> {
    let id = path_id(raw_id, DELETE_FAILED)?;
    let removed = state
        .books
        .delete_by_id(id)
        .await
        .map_err(AppError::store(DELETE_FAILED))?;
    if removed {
        tracing::info!(id, "book deleted");
    } else {
        // Deleting an absent id succeeds.
        tracing::debug!(id, "delete matched no rows");
    }
    Ok(message(StatusCode::OK, "book deleted successfully"))
}
