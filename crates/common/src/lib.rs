pub mod constants;
pub mod file_utils;

use constants::{DEFAULT_COMMENT, DEFAULT_IS_PRIMARY, DEFAULT_USER_ID};
use serde::{Deserialize, Serialize};

/// Metadata sent alongside an uploaded file as text parts of the multipart form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub user_id: String,    // `userId` part
    pub comment: String,    // `comment` part
    pub is_primary: bool,   // `isPrimary` part, sent as "true" / "false"
}

impl UploadMetadata {
    pub fn new(user_id: impl Into<String>, comment: impl Into<String>, is_primary: bool) -> Self {
        Self {
            user_id: user_id.into(),
            comment: comment.into(),
            is_primary,
        }
    }

    /// Text value of the `isPrimary` part
    pub fn is_primary_text(&self) -> &'static str {
        if self.is_primary {
            "true"
        } else {
            "false"
        }
    }
}

impl Default for UploadMetadata {
    /// The values the files API has always received from this client
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID, DEFAULT_COMMENT, DEFAULT_IS_PRIMARY)
    }
}
