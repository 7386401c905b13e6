use actix_web::{web, HttpResponse};
use leptos::logging::{error, log};
use crate::db::Database;
use crate::models::book::NewBook;
use crate::models::like::LikeResponse;
use crate::models::review::NewReview;

/// Registers the JSON API and the like endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/books", web::get().to(list_books)) // GET /api/books
            .route("/books", web::post().to(create_book)) // POST /api/books
            .route("/books/{book_id}", web::get().to(get_book)) // GET /api/books/{id}
            .route("/books/{book_id}/reviews", web::get().to(list_reviews)) // GET /api/books/{id}/reviews
            .route("/books/{book_id}/reviews", web::post().to(create_review)), // POST /api/books/{id}/reviews
    )
    .route("/review/{review_id}/like", web::post().to(like_review)); // POST /review/{id}/like
}

pub async fn list_books(db: web::Data<Database>) -> HttpResponse {
    match db.get_books().await {
        Ok(books) => {
            log!("[API] Returning {} books", books.len());
            HttpResponse::Ok().json(books)
        }
        Err(err) => {
            error!("[API] Failed to fetch books: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch books")
        }
    }
}

pub async fn create_book(db: web::Data<Database>, book: web::Json<NewBook>) -> HttpResponse {
    let book = book.into_inner();
    if !book.is_valid() {
        return HttpResponse::BadRequest().body("A book needs a title and an author");
    }

    let id = match db.insert_book(&book).await {
        Ok(id) => id,
        Err(err) => {
            error!("[API] Failed to insert book: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to save book");
        }
    };
    match db.get_book(id).await {
        Ok(Some(book)) => HttpResponse::Ok().json(book),
        Ok(None) => HttpResponse::InternalServerError().body("Saved book disappeared"),
        Err(err) => {
            error!("[API] Failed to reload book {}: {:?}", id, err);
            HttpResponse::InternalServerError().body("Failed to save book")
        }
    }
}

pub async fn get_book(db: web::Data<Database>, book_id: web::Path<i64>) -> HttpResponse {
    let book_id = book_id.into_inner();
    match db.get_book(book_id).await {
        Ok(Some(book)) => HttpResponse::Ok().json(book),
        Ok(None) => HttpResponse::NotFound().body("Book not found"),
        Err(err) => {
            error!("[API] Failed to fetch book {}: {:?}", book_id, err);
            HttpResponse::InternalServerError().body("Failed to fetch book")
        }
    }
}

pub async fn list_reviews(db: web::Data<Database>, book_id: web::Path<i64>) -> HttpResponse {
    let book_id = book_id.into_inner();
    match db.get_book(book_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().body("Book not found"),
        Err(err) => {
            error!("[API] Failed to fetch book {}: {:?}", book_id, err);
            return HttpResponse::InternalServerError().body("Failed to fetch reviews");
        }
    }

    match db.get_reviews(book_id).await {
        Ok(reviews) => {
            log!("[API] Returning {} reviews for book {}", reviews.len(), book_id);
            HttpResponse::Ok().json(reviews)
        }
        Err(err) => {
            error!("[API] Failed to fetch reviews for book {}: {:?}", book_id, err);
            HttpResponse::InternalServerError().body("Failed to fetch reviews")
        }
    }
}

pub async fn create_review(
    db: web::Data<Database>,
    book_id: web::Path<i64>,
    review: web::Json<NewReview>,
) -> HttpResponse {
    let book_id = book_id.into_inner();
    let review = review.into_inner();
    log!("[API] Received review for book {} (rating {})", book_id, review.rating);

    if !review.is_valid() {
        return HttpResponse::BadRequest().body("A review needs a title and some content");
    }
    match db.get_book(book_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().body("Book not found"),
        Err(err) => {
            error!("[API] Failed to fetch book {}: {:?}", book_id, err);
            return HttpResponse::InternalServerError().body("Failed to save review");
        }
    }

    let saved = match db.insert_review(book_id, &review).await {
        Ok(id) => db.get_review(id).await,
        Err(err) => Err(err),
    };
    match saved {
        Ok(Some(review)) => HttpResponse::Ok().json(review),
        Ok(None) => HttpResponse::InternalServerError().body("Saved review disappeared"),
        Err(err) => {
            error!("[API] Database error: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save review")
        }
    }
}

/// The id arrives as an opaque token; anything that is not a known review gets `success: false`.
pub async fn like_review(db: web::Data<Database>, review_id: web::Path<String>) -> HttpResponse {
    let review_id = review_id.into_inner();
    log!("[API] Like requested for review {}", review_id);

    let Ok(id) = review_id.parse::<i64>() else {
        return HttpResponse::NotFound().json(LikeResponse::failed());
    };
    match db.like_review(id).await {
        Ok(Some(new_likes)) => HttpResponse::Ok().json(LikeResponse::liked(new_likes)),
        Ok(None) => HttpResponse::NotFound().json(LikeResponse::failed()),
        Err(err) => {
            error!("[API] Failed to like review {}: {:?}", id, err);
            HttpResponse::InternalServerError().json(LikeResponse::failed())
        }
    }
}
