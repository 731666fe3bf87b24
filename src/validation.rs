/// Client-side validation for the feedback form.
/// Pure and synchronous; every rule is checked independently so the form can
/// flag all problems at once instead of stopping at the first one.
use std::collections::BTreeMap;

use crate::models::feedback::{Feedback, FeedbackDraft};

/// Field name mapped to a human-readable error message. Empty means valid.
pub type FieldErrors = BTreeMap<String, String>;

/// Raw state of the feedback form: free text plus the rating select's string
/// value ("" while nothing is chosen).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: String,
}

impl DraftForm {
    /// Pre-populates the edit form verbatim from an existing record.
    pub fn from_record(record: &Feedback) -> Self {
        DraftForm {
            name: record.name.clone(),
            email: record.email.clone(),
            message: record.message.clone(),
            rating: record.rating.to_string(),
        }
    }

    /// Builds the write payload. Returns `None` while the rating has not been
    /// chosen (or does not parse into 1-5), so an unvalidated form can never
    /// produce a request body.
    pub fn to_draft(&self) -> Option<FeedbackDraft> {
        let rating = self.rating.parse::<u8>().ok().filter(|r| (1..=5).contains(r))?;
        Some(FeedbackDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            rating,
            message: self.message.clone(),
        })
    }
}

/// Checks a draft against the field rules and reports every violation.
/// Submission is gated on the returned map being empty.
pub fn validate(form: &DraftForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert(
            "email".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }

    if form.message.trim().is_empty() {
        errors.insert("message".to_string(), "Message is required".to_string());
    }

    if !form.rating.parse::<u8>().is_ok_and(|r| (1..=5).contains(&r)) {
        errors.insert("rating".to_string(), "Rating is required".to_string());
    }

    errors
}

/// `local@domain.tld` shape: no whitespace, one `@` with a non-empty local
/// part, and a `.` inside the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
