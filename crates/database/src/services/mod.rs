pub mod catalog;
pub mod course;
pub mod link;
pub mod review;
pub mod teacher;

/// Trims optional free-text input, storing `None` for blank values
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
