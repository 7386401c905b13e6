#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::book::{Book, NewBook};
    use crate::models::rating::Rating;
    use crate::models::review::{NewReview, Review};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::{params, Connection, Error, OptionalExtension, Row};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            db
        }

        fn sample_book() -> NewBook {
            NewBook {
                title: "The Left Hand of Darkness".into(),
                author: "Ursula K. Le Guin".into(),
                description: None,
            }
        }

        fn sample_review(rating: u8) -> NewReview {
            NewReview {
                title: "Cold and warm".into(),
                content: "Stayed with me for weeks.".into(),
                rating: Rating::new(rating).unwrap(),
            }
        }

        #[tokio::test]
        async fn test_schema_creation() {
            let db = create_test_db().await;
            // Running it twice must not fail
            db.create_schema().await.unwrap();

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"books".to_string()));
            assert!(tables.contains(&"reviews".to_string()));
        }

        #[tokio::test]
        async fn test_book_lifecycle() {
            let db = create_test_db().await;
            assert!(db.get_books().await.unwrap().is_empty());

            let id = db.insert_book(&sample_book()).await.unwrap();
            let book = db.get_book(id).await.unwrap().unwrap();
            assert_eq!(book.title, "The Left Hand of Darkness");
            assert_eq!(book.description, None);

            assert_eq!(db.get_books().await.unwrap().len(), 1);
            assert!(db.get_book(id + 1).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_reviews_are_scoped_to_their_book() {
            let db = create_test_db().await;
            let first = db.insert_book(&sample_book()).await.unwrap();
            let second = db.insert_book(&sample_book()).await.unwrap();

            db.insert_review(first, &sample_review(5)).await.unwrap();
            db.insert_review(first, &sample_review(3)).await.unwrap();
            db.insert_review(second, &sample_review(1)).await.unwrap();

            let reviews = db.get_reviews(first).await.unwrap();
            assert_eq!(reviews.len(), 2);
            assert_eq!(reviews[0].rating.map(Rating::value), Some(5));
            assert_eq!(reviews[1].rating.map(Rating::value), Some(3));
            assert!(reviews.iter().all(|r| r.likes == 0 && r.book_id == first));
        }

        #[tokio::test]
        async fn test_like_increments_and_reports_count() {
            let db = create_test_db().await;
            let book = db.insert_book(&sample_book()).await.unwrap();
            let review = db.insert_review(book, &sample_review(4)).await.unwrap();

            assert_eq!(db.like_review(review).await.unwrap(), Some(1));
            assert_eq!(db.like_review(review).await.unwrap(), Some(2));
            assert_eq!(db.get_review(review).await.unwrap().unwrap().likes, 2);
        }

        #[tokio::test]
        async fn test_out_of_scale_ratings_read_as_unrated() {
            let db = create_test_db().await;
            let book = db.insert_book(&sample_book()).await.unwrap();
            let kept = db.insert_review(book, &sample_review(2)).await.unwrap();
            for stored in [-1_i64, 0, 9, 300] {
                let conn = db.conn.lock().await;
                conn.execute(
                    "INSERT INTO reviews (book_id, title, content, rating) VALUES (?, 'old', 'imported', ?)",
                    params![book, stored],
                )
                .unwrap();
            }

            let reviews = db.get_reviews(book).await.unwrap();
            assert_eq!(reviews.len(), 5);
            assert_eq!(reviews[0].id, kept);
            assert_eq!(reviews[0].rating.map(Rating::value), Some(2));
            assert!(reviews[1..].iter().all(|r| r.rating.is_none()));
        }

        #[tokio::test]
        async fn test_like_unknown_review() {
            let db = create_test_db().await;
            assert_eq!(db.like_review(404).await.unwrap(), None);
        }
    }

    fn book_from_row(row: &Row<'_>) -> Result<Book, Error> {
        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            description: row.get(3)?,
        })
    }

    fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
        // Ratings outside the scale are shown as unrated
        let rating: Option<i64> = row.get(4)?;
        Ok(Review {
            id: row.get(0)?,
            book_id: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            rating: rating
                .and_then(|r| u8::try_from(r).ok())
                .and_then(|r| Rating::new(r).ok()),
            likes: row.get(5)?,
        })
    }

    // Define a struct to represent a database connection
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            // 1. Books table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS books (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    author TEXT NOT NULL,
                    description TEXT
                );",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating books table: {}", e);
                e
            })?;

            // 2. Reviews table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY,
                    book_id INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    content TEXT NOT NULL,
                    rating INTEGER,
                    likes INTEGER NOT NULL DEFAULT 0,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE
                );
                CREATE INDEX IF NOT EXISTS idx_reviews_book ON reviews (book_id);",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        pub async fn insert_book(&self, book: &NewBook) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO books (title, author, description) VALUES (?, ?, ?)",
                params![book.title, book.author, book.description],
            )?;
            let id = conn.last_insert_rowid();
            log!("[DB] Book inserted: {} ({})", book.title, id);
            Ok(id)
        }

        pub async fn get_books(&self) -> Result<Vec<Book>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt =
                conn.prepare("SELECT id, title, author, description FROM books ORDER BY title, id")?;
            let books = stmt.query_map([], book_from_row)?;
            let result = books.collect::<Result<Vec<_>, _>>()?;
            logging::log!("Fetched {} books from the database", result.len());
            Ok(result)
        }

        pub async fn get_book(&self, book_id: i64) -> Result<Option<Book>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT id, title, author, description FROM books WHERE id = ?",
                [book_id],
                book_from_row,
            )
            .optional()
        }

        // Insert a review, returning its row ID
        pub async fn insert_review(&self, book_id: i64, review: &NewReview) -> Result<i64, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO reviews (book_id, title, content, rating) VALUES (?, ?, ?, ?)",
                params![book_id, review.title, review.content, review.rating.value()],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            log!("[DB] Review {} inserted for book {}", id, book_id);
            Ok(id)
        }

        pub async fn get_review(&self, review_id: i64) -> Result<Option<Review>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT id, book_id, title, content, rating, likes FROM reviews WHERE id = ?",
                [review_id],
                review_from_row,
            )
            .optional()
        }

        // Reviews of one book, oldest first
        pub async fn get_reviews(&self, book_id: i64) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, book_id, title, content, rating, likes
                 FROM reviews
                 WHERE book_id = ?
                 ORDER BY id",
            )?;
            let reviews = stmt.query_map([book_id], review_from_row)?;
            reviews.collect()
        }

        /// Adds one like and returns the new count, or `None` if the review does not exist.
        pub async fn like_review(&self, review_id: i64) -> Result<Option<i64>, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;
            let changed = tx.execute(
                "UPDATE reviews SET likes = likes + 1 WHERE id = ?",
                [review_id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let likes: i64 =
                tx.query_row("SELECT likes FROM reviews WHERE id = ?", [review_id], |row| {
                    row.get(0)
                })?;
            tx.commit()?;
            log!("[DB] Review {} now has {} likes", review_id, likes);
            Ok(Some(likes))
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
