use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,                     // Row ID of the book
    pub title: String,               // Book title
    pub author: String,              // Author name
    pub description: Option<String>, // Optional blurb shown on the home page
}

/// Payload accepted by `POST /api/books`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewBook {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}
