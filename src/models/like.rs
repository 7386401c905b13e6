use serde::{Deserialize, Serialize};
use crate::error::ClientError;

pub const HEART_OUTLINE_CLASS: &str = "lni lni-heart";
pub const HEART_FILLED_CLASS: &str = "lni lni-heart-fill";
pub const LIKED_COLOR: &str = "pink";

/// Path of the like endpoint for one review. The id is passed through as-is.
pub fn like_path(review_id: &str) -> String {
    format!("/review/{}/like", review_id)
}

/// Body returned by `POST /review/{id}/like`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LikeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_likes: Option<i64>,
}

impl LikeResponse {
    pub fn liked(new_likes: i64) -> Self {
        LikeResponse {
            success: true,
            new_likes: Some(new_likes),
        }
    }

    pub fn failed() -> Self {
        LikeResponse {
            success: false,
            new_likes: None,
        }
    }
}

/// What a like button shows. Only changes on a confirmed server success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    likes: i64,
    liked: bool,
}

impl LikeState {
    pub fn new(likes: i64, liked: bool) -> Self {
        LikeState { likes, liked }
    }

    pub fn likes(&self) -> i64 {
        self.likes
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn icon_class(&self) -> &'static str {
        if self.liked {
            HEART_FILLED_CLASS
        } else {
            HEART_OUTLINE_CLASS
        }
    }

    pub fn icon_color(&self) -> Option<&'static str> {
        self.liked.then_some(LIKED_COLOR)
    }

    /// Text that follows the icon inside the button.
    pub fn label(&self) -> String {
        format!(" {}", self.likes)
    }

    pub fn apply(self, response: &LikeResponse) -> Result<Self, ClientError> {
        if !response.success {
            return Err(ClientError::Rejected);
        }
        let likes = response.new_likes.ok_or(ClientError::MissingCount)?;
        Ok(LikeState { likes, liked: true })
    }
}
