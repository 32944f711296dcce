use serde::{Deserialize, Serialize};

use crate::shared::models::PostChanges;

#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Partial post update; absent or empty fields keep their current value
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_changes(self) -> PostChanges {
        PostChanges::from_fields(self.title, self.content)
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateCommentRequest {
    pub content: String,
}
