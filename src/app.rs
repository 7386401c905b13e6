//! Main application entry point for the book review site.
//! Wires the header navigation, the book list, the review pages and the review form together.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::client;
use crate::components::books_list::BooksList;
use crate::components::error_page::{ErrorPage, NOT_FOUND_MESSAGE};
use crate::components::nav_toggle::NavToggle;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::error::ClientError;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bookreview.css"/>
        <Link rel="stylesheet" href="https://cdn.lineicons.com/4.0/lineicons.css"/>
        <Title text="Book Reviews"/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/about" view=AboutPage/>
                    <Route path="/book/:id/reviews" view=BookReviewsPage/>
                    <Route path="/book/:id/review" view=NewReviewPage/>
                    <Route path="/book/:id/review/submitted" view=ReviewSubmittedPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <A href="/">{ "Book Reviews" }</A>
            <NavToggle>
                <li><A href="/">{ "Home" }</A></li>
                <li><A href="/about">{ "About" }</A></li>
            </NavToggle>
        </header>
    }
}

/// Turns a client failure into the code and message of an error panel.
fn page_error(err: ClientError, not_found: &str) -> (u16, String) {
    match err {
        ClientError::Status(404) => (404, not_found.to_string()),
        ClientError::Status(code) => (code, "Something went wrong on our side.".to_string()),
        other => (500, other.to_string()),
    }
}

fn use_book_id() -> Memo<Option<i64>> {
    let params = use_params_map();
    create_memo(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok())))
}

#[component]
fn HomePage() -> impl IntoView {
    let books = create_local_resource(
        || (),
        |_| async move { client::fetch_books().await.map_err(|e| page_error(e, "No books found")) },
    );

    view! {
        <h1>{ "Books" }</h1>
        <Suspense fallback=|| view! { <p>{ "Loading..." }</p> }>
            {move || books.get().map(|result| match result {
                Ok(books) => view! { <BooksList books=books/> }.into_view(),
                Err((code, message)) => view! { <ErrorPage code=code message=message/> }.into_view(),
            })}
        </Suspense>
    }
}

#[component]
fn BookReviewsPage() -> impl IntoView {
    let book_id = use_book_id();
    let page = create_local_resource(
        move || book_id.get(),
        |book_id| async move {
            let Some(book_id) = book_id else {
                return Err((404, "Book not found".to_string()));
            };
            let book = client::fetch_book(book_id)
                .await
                .map_err(|e| page_error(e, "Book not found"))?;
            let reviews = client::fetch_reviews(book_id)
                .await
                .map_err(|e| page_error(e, "No reviews for this book"))?;
            Ok((book, reviews))
        },
    );

    view! {
        <Suspense fallback=|| view! { <p>{ "Loading reviews..." }</p> }>
            {move || page.get().map(|result| match result {
                Ok((book, reviews)) if reviews.is_empty() => view! {
                    <h2>{ book.title }</h2>
                    <ErrorPage code=404 message="No reviews for this book"/>
                }.into_view(),
                Ok((book, reviews)) => view! {
                    <h2>{ book.title }</h2>
                    <p>{ format!("by {}", book.author) }</p>
                    <ReviewsList reviews=reviews/>
                }.into_view(),
                Err((code, message)) => view! { <ErrorPage code=code message=message/> }.into_view(),
            })}
        </Suspense>
    }
}

#[component]
fn NewReviewPage() -> impl IntoView {
    let book_id = use_book_id();

    move || match book_id.get() {
        Some(book_id) => view! { <ReviewForm book_id=book_id/> }.into_view(),
        None => view! { <NotFound/> }.into_view(),
    }
}

#[component]
fn ReviewSubmittedPage() -> impl IntoView {
    let book_id = use_book_id();

    view! {
        <h2>{ "Thanks for your review!" }</h2>
        {move || book_id.get().map(|id| view! {
            <A href=format!("/book/{}/reviews", id)>{ "See all reviews" }</A>
        })}
    }
}

#[component]
fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About"/>
        <h2>{ "About" }</h2>
        <p>{ "Read what others thought of a book, like the reviews you agree with and write your own." }</p>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! { <ErrorPage code=404 message=NOT_FOUND_MESSAGE/> }
}
