pub mod book;
pub mod like;
pub mod rating;
pub mod review;
