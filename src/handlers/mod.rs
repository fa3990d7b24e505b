//! HTTP handlers for the Book endpoints.

pub mod book;
pub use book::*;
