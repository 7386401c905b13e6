use leptos::*;
use leptos::logging::{error, log};
use crate::client;
use crate::models::like::LikeState;

/// Heart button for one review.
///
/// A click posts to the like endpoint and, once the server confirms, fills
/// the heart and shows the count it returned. Failures are logged and leave
/// the button untouched. Clicks are not debounced: every click sends its own
/// request.
#[component]
pub fn LikeButton(
    #[prop(into)] review_id: String,
    likes: i64,
    #[prop(optional)] liked: bool,
) -> impl IntoView {
    let state = create_rw_signal(LikeState::new(likes, liked));
    let data_review_id = review_id.clone();

    let on_click = move |_| {
        let review_id = review_id.clone();
        log!("[LIKE] Review ID: {}", review_id);
        spawn_local(async move {
            match client::like_review(&review_id).await {
                Ok(response) => match state.get_untracked().apply(&response) {
                    Ok(next) => {
                        log!("[LIKE] Review {} now has {} likes", review_id, next.likes());
                        state.set(next);
                    }
                    Err(err) => error!("[LIKE] Failed to update likes for review {}: {}", review_id, err),
                },
                Err(err) => error!("[LIKE] Error: {}", err),
            }
        });
    };

    view! {
        <button class="like_button" data-review-id=data_review_id on:click=on_click>
            <i
                class=move || state.get().icon_class()
                style:color=move || state.get().icon_color()
            ></i>
            {move || state.get().label()}
        </button>
    }
}
