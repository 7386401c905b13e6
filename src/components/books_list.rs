//! Home page list of books with links to their reviews and the review form.
use leptos::*;
use leptos_router::A;
use crate::models::book::Book;

#[component]
pub fn BooksList(books: Vec<Book>) -> impl IntoView {
    if books.is_empty() {
        return view! { <p>{ "No books yet." }</p> }.into_view();
    }

    view! {
        <ul class="books">
            {books.into_iter().map(|book| {
                let reviews_href = format!("/book/{}/reviews", book.id);
                let review_href = format!("/book/{}/review", book.id);
                view! {
                    <li>
                        <strong>{ book.title }</strong>
                        { format!(" by {}", book.author) }
                        {book.description.map(|d| view! { <p>{ d }</p> })}
                        <A href=reviews_href>{ "Reviews" }</A>
                        { " | " }
                        <A href=review_href>{ "Write a review" }</A>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_view()
}
