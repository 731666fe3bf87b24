use chrono::{DateTime, Utc};
use feedbackware::models::feedback::Feedback;
use feedbackware::validation::{is_valid_email, validate, DraftForm};

fn draft(name: &str, email: &str, message: &str, rating: &str) -> DraftForm {
    DraftForm {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        rating: rating.to_string(),
    }
}

#[test]
fn valid_draft_passes() {
    let errors = validate(&draft("Jane Doe", "jane@example.com", "Great service!", "5"));
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn empty_name_is_the_only_error_on_an_otherwise_valid_draft() {
    let errors = validate(&draft("", "a@b.com", "hi", "3"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
}

#[test]
fn whitespace_only_name_and_message_are_rejected() {
    let errors = validate(&draft("   ", "a@b.com", " \n\t ", "3"));
    assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    assert_eq!(
        errors.get("message").map(String::as_str),
        Some("Message is required")
    );
}

#[test]
fn blank_email_reports_required_not_invalid() {
    let errors = validate(&draft("Jane", "", "hi", "3"));
    assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
}

#[test]
fn malformed_emails_are_rejected() {
    for bad in [
        "plain",
        "a@b",
        "@b.com",
        "a@",
        "a@b.",
        "a@.com",
        "a b@c.com",
        "a@b c.com",
        "a@@b.com",
    ] {
        let errors = validate(&draft("Jane", bad, "hi", "3"));
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Please enter a valid email address"),
            "expected rejection for {bad:?}"
        );
    }
}

#[test]
fn well_formed_emails_are_accepted() {
    for good in [
        "a@b.co",
        "first.last@sub.domain.org",
        "a+tag@b.io",
        "UPPER@CASE.COM",
    ] {
        let errors = validate(&draft("Jane", good, "hi", "3"));
        assert!(errors.get("email").is_none(), "expected acceptance for {good:?}");
    }
}

#[test]
fn email_shape_helper_matches_the_form_rule() {
    assert!(is_valid_email("jane@example.com"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("jane example@x.com"));
}

#[test]
fn ratings_outside_one_to_five_are_rejected() {
    for bad in ["", "0", "6", "abc", "4.5", "-1"] {
        let errors = validate(&draft("Jane", "a@b.com", "hi", bad));
        assert_eq!(
            errors.get("rating").map(String::as_str),
            Some("Rating is required"),
            "expected rejection for {bad:?}"
        );
    }
    for good in ["1", "2", "3", "4", "5"] {
        let errors = validate(&draft("Jane", "a@b.com", "hi", good));
        assert!(errors.get("rating").is_none(), "expected acceptance for {good:?}");
    }
}

#[test]
fn all_violations_are_reported_together() {
    let errors = validate(&draft("", "not-an-email", "", ""));
    assert_eq!(errors.len(), 4);
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("message"));
    assert!(errors.contains_key("rating"));
}

#[test]
fn to_draft_requires_a_chosen_rating() {
    assert!(draft("Jane", "a@b.com", "hi", "").to_draft().is_none());
    assert!(draft("Jane", "a@b.com", "hi", "9").to_draft().is_none());

    let payload = draft("Jane", "a@b.com", "hi there", "4").to_draft().unwrap();
    assert_eq!(payload.name, "Jane");
    assert_eq!(payload.email, "a@b.com");
    assert_eq!(payload.rating, 4);
    assert_eq!(payload.message, "hi there");
}

#[test]
fn edit_form_prefills_verbatim_from_a_record() {
    let created: DateTime<Utc> = "2026-01-05T15:04:00Z".parse().unwrap();
    let record = Feedback {
        id: 7,
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        rating: 4,
        message: "line one\nline two".to_string(),
        created_at: created,
        updated_at: None,
    };

    let form = DraftForm::from_record(&record);
    assert_eq!(form.name, "Jane Doe");
    assert_eq!(form.email, "jane@example.com");
    assert_eq!(form.message, "line one\nline two");
    assert_eq!(form.rating, "4");
    assert!(validate(&form).is_empty());
}
