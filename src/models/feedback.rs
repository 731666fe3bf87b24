// src/models/feedback.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of records per page, fixed by the backend's paginator.
pub const PAGE_SIZE: u64 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: u64,                           // Server-assigned, immutable
    pub name: String,                      // Submitter's name
    pub email: String,                     // Submitter's email address
    pub rating: u8,                        // 1-5
    pub message: String,                   // Multi-line feedback text
    pub created_at: DateTime<Utc>,         // Server-assigned, immutable
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>, // Server-maintained, not displayed
}

impl Feedback {
    /// Timestamp as shown on cards and the detail view, e.g. "Jan 5, 2026, 03:04 PM".
    pub fn submitted_on(&self) -> String {
        self.created_at.format("%b %-d, %Y, %I:%M %p").to_string()
    }

    /// Message cut down to 100 characters for the list cards.
    pub fn message_preview(&self) -> String {
        if self.message.chars().count() > 100 {
            let head: String = self.message.chars().take(100).collect();
            format!("{head}...")
        } else {
            self.message.clone()
        }
    }
}

/// The four user-editable fields, as sent in create and update bodies.
/// `id` and `created_at` are never part of a write request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub message: String,
}

/// One bounded slice of the collection plus the pagination metadata the
/// list view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(PAGE_SIZE)
    }
}

/// Wire shape of the list endpoint. The backend normally answers with the
/// paginated envelope, but the client also tolerates a bare array (seen when
/// pagination is disabled server-side).
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ListResponse {
    Paginated {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<Feedback>,
    },
    Plain(Vec<Feedback>),
}

impl From<ListResponse> for Page<Feedback> {
    fn from(response: ListResponse) -> Self {
        match response {
            ListResponse::Paginated {
                count,
                next,
                previous,
                results,
            } => Page {
                items: results,
                count,
                has_next: next.is_some(),
                has_previous: previous.is_some(),
            },
            ListResponse::Plain(items) => Page {
                count: items.len() as u64,
                has_next: false,
                has_previous: false,
                items,
            },
        }
    }
}
