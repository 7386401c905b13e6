use thiserror::Error;

/// Failures of the browser-side calls in [`crate::client`].
///
/// None of these reach the user; callers log them to the console and leave
/// the page as it was.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("server reported the like as unsuccessful")]
    Rejected,
    #[error("server response is missing `new_likes`")]
    MissingCount,
}
