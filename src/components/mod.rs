pub mod books_list;
pub mod error_page;
pub mod like_button;
pub mod nav_toggle;
pub mod review_form;
pub mod reviews_list;
pub mod star_rating;
