use leptos::*;
use leptos::logging::{error, log};
use leptos::ev::SubmitEvent;
use leptos_router::use_navigate;
use crate::client;
use crate::components::star_rating::StarRating;
use crate::models::rating::Rating;
use crate::models::review::NewReview;

#[component]
pub fn ReviewForm(book_id: i64) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (rating, set_rating) = create_signal(None::<Rating>);
    let (submit_error, set_submit_error) = create_signal(None::<String>);
    let navigate = use_navigate();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(rating) = rating.get_untracked() else {
            set_submit_error.set(Some("Pick a rating first.".to_string()));
            return;
        };
        let review = NewReview {
            title: title.get_untracked(),
            content: content.get_untracked(),
            rating,
        };
        if !review.is_valid() {
            set_submit_error.set(Some("A review needs a title and some content.".to_string()));
            return;
        }

        let navigate = navigate.clone();
        spawn_local(async move {
            match client::submit_review(book_id, &review).await {
                Ok(saved) => {
                    log!("[REVIEW] Saved review {} for book {}", saved.id, book_id);
                    navigate(&format!("/book/{}/review/submitted", book_id), Default::default());
                }
                Err(err) => {
                    error!("[REVIEW] Failed to submit review: {}", err);
                    set_submit_error.set(Some("Could not save your review.".to_string()));
                }
            }
        });
    };

    view! {
        <form on:submit=handle_submit>
            <h3>{ "Write a Review" }</h3>
            <input
                type="text"
                name="title"
                placeholder="Title"
                on:input=move |e| set_title.set(event_target_value(&e))
            />
            <textarea
                name="review_content"
                placeholder="Write your review here"
                on:input=move |e| set_content.set(event_target_value(&e))
            />
            <h3>{ "Rating" }</h3>
            <StarRating on_change=move |r: Rating| set_rating.set(Some(r)) />
            {move || rating.get().map(|r| view! { <span class="rating-value">{ format!("{}/5", r) }</span> })}
            {move || submit_error.get().map(|msg| view! { <p class="error">{ msg }</p> })}
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
