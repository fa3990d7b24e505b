//! Book record and create payload as exchanged over the wire.

use serde::{Deserialize, Serialize};

/// A persisted book. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub publisher: String,
}

/// Create payload. Missing fields deserialize as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewBook {
    pub author: String,
    pub title: String,
    pub publisher: String,
}

impl NewBook {
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            author: self.author,
            title: self.title,
            publisher: self.publisher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_missing_fields_default_to_empty() {
        let b: NewBook = serde_json::from_str(r#"{"author":"A"}"#).unwrap();
        assert_eq!(b.author, "A");
        assert_eq!(b.title, "");
        assert_eq!(b.publisher, "");
    }

    #[test]
    fn new_book_rejects_wrong_field_type() {
        assert!(serde_json::from_str::<NewBook>(r#"{"author":5}"#).is_err());
    }

    #[test]
    fn book_wire_shape() {
        let book = NewBook {
            author: "A".into(),
            title: "T".into(),
            publisher: "P".into(),
        }
        .into_book(7);
        let v = serde_json::to_value(&book).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": 7, "author": "A", "title": "T", "publisher": "P"})
        );
    }
}
