//! Browser-side calls to the review API, made with `gloo-net`.
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use crate::error::ClientError;
use crate::models::book::Book;
use crate::models::like::{like_path, LikeResponse};
use crate::models::review::{NewReview, Review};

fn ensure_ok(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ClientError::Status(response.status()))
    }
}

/// `POST /review/{id}/like` with a JSON content type and no body.
///
/// The body is decoded whatever the status code, the server reports failures
/// through `success`.
pub async fn like_review(review_id: &str) -> Result<LikeResponse, ClientError> {
    let url = like_path(review_id);
    log!("[CLIENT] POST {}", url);
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .send()
        .await?;
    Ok(response.json::<LikeResponse>().await?)
}

pub async fn fetch_books() -> Result<Vec<Book>, ClientError> {
    let response = ensure_ok(Request::get("/api/books").send().await?)?;
    Ok(response.json().await?)
}

pub async fn fetch_book(book_id: i64) -> Result<Book, ClientError> {
    let url = format!("/api/books/{}", book_id);
    let response = ensure_ok(Request::get(&url).send().await?)?;
    Ok(response.json().await?)
}

pub async fn fetch_reviews(book_id: i64) -> Result<Vec<Review>, ClientError> {
    let url = format!("/api/books/{}/reviews", book_id);
    let response = ensure_ok(Request::get(&url).send().await?)?;
    Ok(response.json().await?)
}

pub async fn submit_review(book_id: i64, review: &NewReview) -> Result<Review, ClientError> {
    let url = format!("/api/books/{}/reviews", book_id);
    log!("[CLIENT] POST {} (rating {})", url, review.rating);
    let response = ensure_ok(Request::post(&url).json(review)?.send().await?)?;
    Ok(response.json().await?)
}
