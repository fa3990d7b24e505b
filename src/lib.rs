//! Book store: REST backend for the Book resource on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{load_from_env, AppConfig, DbConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::migrate_books;
pub use model::{Book, NewBook};
pub use response::{message, with_data};
pub use routes::{app, book_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{BookStore, MemoryBookStore, PgBookStore};
