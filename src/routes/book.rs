//! Book routes, nested under `/api`.

use crate::handlers::book::{
    create_book, delete_book, delete_book_without_id, get_book, get_book_without_id, list_books,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/create_book", post(create_book))
        .route("/books", get(list_books))
        .route("/get_book/", get(get_book_without_id))
        .route("/get_book/:id", get(get_book))
        .route("/delete_book/", delete(delete_book_without_id))
        .route("/delete_book/:id", delete(delete_book))
        .with_state(state)
}
