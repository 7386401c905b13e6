use leptos::*;
use leptos::html::Input;
use leptos::logging::{error, log, warn};
use crate::models::rating::Rating;

/// Star labels mirrored into a hidden `#rating` input.
///
/// Clicking a label copies its value into the input and fires one `change`
/// event on it. `on_change` listens to that event, like any other listener
/// bound to the input would.
#[component]
pub fn StarRating(
    #[prop(optional, into)] on_change: Option<Callback<Rating>>,
) -> impl IntoView {
    let input_ref = create_node_ref::<Input>();

    let select = move |rating: Rating| {
        let Some(input) = input_ref.get_untracked() else {
            warn!("[RATING] Rating input is not mounted");
            return;
        };
        input.set_value(&rating.to_string());
        // Leptos listens for `change` at the window, so the event has to bubble
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        match web_sys::Event::new_with_event_init_dict("change", &init) {
            Ok(event) => {
                if let Err(err) = input.dispatch_event(&event) {
                    error!("[RATING] Failed to dispatch change: {:?}", err);
                }
            }
            Err(err) => error!("[RATING] Failed to create change event: {:?}", err),
        }
    };

    let handle_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<Rating>() {
            Ok(rating) => {
                log!("[RATING] Rating set to {}", rating);
                if let Some(on_change) = on_change {
                    on_change.call(rating);
                }
            }
            Err(err) => warn!("[RATING] Ignoring rating input value: {}", err),
        }
    };

    view! {
        <div class="star-rating">
            // Highest first so `label:hover ~ label` lights the lower stars.
            {Rating::all().rev().map(move |rating| view! {
                <label
                    data-value=rating.to_string()
                    title=format!("{} stars", rating)
                    on:click=move |_| select(rating)
                >
                    { "★" }
                </label>
            }).collect_view()}
        </div>
        <input type="hidden" id="rating" name="rating" node_ref=input_ref on:change=handle_change />
    }
}
