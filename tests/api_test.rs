use feedbackware::api::{field_errors_from_value, status_error, ApiError, FeedbackApi, ListFilters};
use serde_json::json;

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = FeedbackApi::new("http://localhost:8000/api/");
    assert_eq!(api.base_url(), "http://localhost:8000/api");
}

#[test]
fn list_url_carries_page_and_active_filters() {
    let api = FeedbackApi::new("http://localhost:8000/api");
    let filters = ListFilters {
        name: "Jane Doe".to_string(),
        rating: "5".to_string(),
    };
    assert_eq!(
        api.list_url(&filters, 2),
        "http://localhost:8000/api/feedback/?page=2&name=Jane%20Doe&rating=5"
    );
}

#[test]
fn blank_filters_are_left_out_of_the_query() {
    let api = FeedbackApi::new("http://localhost:8000/api");
    assert_eq!(
        api.list_url(&ListFilters::default(), 1),
        "http://localhost:8000/api/feedback/?page=1"
    );

    let whitespace_name = ListFilters {
        name: "   ".to_string(),
        rating: String::new(),
    };
    assert_eq!(
        api.list_url(&whitespace_name, 3),
        "http://localhost:8000/api/feedback/?page=3"
    );
}

#[test]
fn record_url_keeps_the_trailing_slash() {
    let api = FeedbackApi::new("http://localhost:8000/api");
    assert_eq!(api.record_url(42), "http://localhost:8000/api/feedback/42/");
}

#[test]
fn missing_records_and_server_failures_classify_differently() {
    assert_eq!(status_error(404), ApiError::NotFound);
    assert_eq!(status_error(500), ApiError::Server(500));
    assert_eq!(status_error(403), ApiError::Server(403));
}

#[test]
fn field_errors_join_message_lists() {
    let body = json!({
        "email": ["Enter a valid email address."],
        "name": ["This field is required.", "Too long."]
    });
    let errors = field_errors_from_value(&body).unwrap();
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some("Enter a valid email address.")
    );
    assert_eq!(
        errors.get("name").map(String::as_str),
        Some("This field is required. Too long.")
    );
}

#[test]
fn plain_string_errors_pass_through() {
    let body = json!({"non_field_errors": "Duplicate feedback."});
    let errors = field_errors_from_value(&body).unwrap();
    assert_eq!(
        errors.get("non_field_errors").map(String::as_str),
        Some("Duplicate feedback.")
    );
}

#[test]
fn non_object_bodies_are_not_field_errors() {
    assert!(field_errors_from_value(&json!("bad request")).is_none());
    assert!(field_errors_from_value(&json!(["a", "b"])).is_none());
    assert!(field_errors_from_value(&json!(400)).is_none());
}
