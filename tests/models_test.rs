use feedbackware::models::feedback::{Feedback, FeedbackDraft, ListResponse, Page};
use serde_json::json;

fn record_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Jane Doe",
        "email": "jane@example.com",
        "rating": 5,
        "message": "Great service!",
        "created_at": "2026-01-05T15:04:00Z",
        "updated_at": null
    })
}

fn page_from(value: serde_json::Value) -> Page<Feedback> {
    serde_json::from_value::<ListResponse>(value).unwrap().into()
}

#[test]
fn paginated_envelope_normalizes_to_a_page() {
    let page = page_from(json!({
        "count": 25,
        "next": "http://localhost:8000/api/feedback/?page=2",
        "previous": null,
        "results": [record_json(1), record_json(2)]
    }));

    assert_eq!(page.count, 25);
    assert_eq!(page.items.len(), 2);
    assert!(page.has_next);
    assert!(!page.has_previous);
    assert_eq!(page.total_pages(), 3);
}

#[test]
fn direction_flags_follow_the_envelope_links() {
    let middle = page_from(json!({
        "count": 25,
        "next": "http://localhost:8000/api/feedback/?page=3",
        "previous": "http://localhost:8000/api/feedback/?page=1",
        "results": [record_json(11)]
    }));
    assert!(middle.has_next);
    assert!(middle.has_previous);

    let last = page_from(json!({
        "count": 25,
        "next": null,
        "previous": "http://localhost:8000/api/feedback/?page=2",
        "results": [record_json(21)]
    }));
    assert!(!last.has_next);
    assert!(last.has_previous);
}

#[test]
fn bare_array_is_treated_as_a_single_page() {
    let page = page_from(json!([record_json(1), record_json(2), record_json(3)]));

    assert_eq!(page.count, 3);
    assert_eq!(page.items.len(), 3);
    assert!(!page.has_next);
    assert!(!page.has_previous);
    assert_eq!(page.total_pages(), 1);
}

#[test]
fn total_pages_rounds_up() {
    let empty = Page::<Feedback> {
        items: vec![],
        count: 0,
        has_next: false,
        has_previous: false,
    };
    assert_eq!(empty.total_pages(), 0);
    assert_eq!(Page { count: 10, ..empty.clone() }.total_pages(), 1);
    assert_eq!(Page { count: 11, ..empty.clone() }.total_pages(), 2);
    assert_eq!(Page { count: 25, ..empty }.total_pages(), 3);
}

#[test]
fn created_at_renders_month_day_year_and_minutes() {
    let record: Feedback = serde_json::from_value(record_json(1)).unwrap();
    assert_eq!(record.submitted_on(), "Jan 5, 2026, 03:04 PM");
}

#[test]
fn message_preview_truncates_long_messages() {
    let mut record: Feedback = serde_json::from_value(record_json(1)).unwrap();

    record.message = "x".repeat(100);
    assert_eq!(record.message_preview(), record.message);

    record.message = "x".repeat(101);
    let preview = record.message_preview();
    assert_eq!(preview.chars().count(), 103);
    assert!(preview.ends_with("..."));
}

#[test]
fn missing_updated_at_still_deserializes() {
    let mut value = record_json(1);
    value.as_object_mut().unwrap().remove("updated_at");
    let record: Feedback = serde_json::from_value(value).unwrap();
    assert!(record.updated_at.is_none());
}

#[test]
fn draft_serializes_only_the_user_fields() {
    let draft = FeedbackDraft {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        rating: 4,
        message: "hi".to_string(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert!(object.get("id").is_none());
    assert!(object.get("created_at").is_none());
}
