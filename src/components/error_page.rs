use leptos::*;

pub const NOT_FOUND_MESSAGE: &str =
    "Not Found, someone typed something wrong and it was probably you.";

#[component]
pub fn ErrorPage(code: u16, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error">
            <h2>{ code }</h2>
            <p>{ message }</p>
        </div>
    }
}
