//! Form rules kept free of the DOM: what may be submitted, which controls
//! are enabled, and where each request goes.

use crate::API_BASE_URL;

pub const CREATE_FIELDS_MSG: &'static str = "Please fill in all fields.";
pub const UPDATE_FIELDS_MSG: &'static str = "Please fill in both author and content.";
pub const DELETE_TARGET_MSG: &'static str = "Please select a post to delete.";

/// Create requires author, title and content before any request is issued.
pub fn validate_create(author: &str, title: &str, content: &str) -> Result<(), &'static str> {
    if author.is_empty() || title.is_empty() || content.is_empty() {
        Err(CREATE_FIELDS_MSG)
    } else {
        Ok(())
    }
}

/// Update requires the new author and the content.
pub fn validate_update(author: &str, content: &str) -> Result<(), &'static str> {
    if author.is_empty() || content.is_empty() {
        Err(UPDATE_FIELDS_MSG)
    } else {
        Ok(())
    }
}

/// The prompt option of a post `<select>` has an empty value; everything
/// else is a post id.
pub fn selection_from_value(value: &str) -> Option<u64> {
    value.parse().ok()
}

pub fn update_enabled(selected: Option<u64>) -> bool {
    selected.is_some()
}

pub fn delete_enabled(target: Option<u64>) -> bool {
    target.is_some()
}

pub fn posts_url() -> String {
    format!("{}/posts", API_BASE_URL)
}

pub fn post_url(id: u64) -> String {
    format!("{}/posts/{}", API_BASE_URL, id)
}

pub fn range_url(from: &str, to: &str) -> String {
    format!("{}/posts/range?from={}&to={}", API_BASE_URL, from, to)
}
