use leptos::*;
use crate::components::like_button::LikeButton;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div>
            <h3>{ "Reviews" }</h3>
            <ul class="reviews">
                {
                    reviews.into_iter().map(|review| {
                        let stars = review
                            .rating
                            .map(|rating| "★".repeat(rating.value() as usize))
                            .unwrap_or_default();
                        view! {
                            <li class="review">
                                <h4>{ review.title }</h4>
                                <span class="stars">{ stars }</span>
                                <p>{ review.content }</p>
                                <LikeButton review_id=review.id.to_string() likes=review.likes />
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
