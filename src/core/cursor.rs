use crate::domain::model::{Cursor, PageRequest};

/// Results requested from the catalog per inline page.
pub const RESULTS_PER_QUERY: u64 = 10;

/// Decode an incoming pagination token. Anything that is not a plain decimal
/// number (including an absent token) means the first page.
pub fn decode_offset(token: Option<&str>) -> u64 {
    match token {
        Some(t) if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) => {
            t.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

pub fn page_for(offset: u64, per_page: u64) -> PageRequest {
    PageRequest {
        page: offset / per_page + 1,
        per_page,
    }
}

impl Cursor {
    /// Token for the following page, or `None` when the result set is exhausted.
    pub fn next_token(&self, per_page: u64) -> Option<String> {
        self.has_next
            .then(|| self.offset.saturating_add(per_page).to_string())
    }
}
