// src/models/review.rs
use serde::{Deserialize, Serialize};
use crate::models::rating::Rating;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,                // Row ID, also the token carried by the like button
    pub book_id: i64,           // ID of the book the review is associated with
    pub title: String,          // Headline of the review
    pub content: String,        // Content of the review
    pub rating: Option<Rating>, // Star rating, absent for older reviews
    pub likes: i64,             // Number of likes received so far
}

/// Payload accepted by `POST /api/books/{id}/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub title: String,
    pub content: String,
    pub rating: Rating,
}

impl NewReview {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}
