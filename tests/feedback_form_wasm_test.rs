#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use feedbackware::app::App;
use gloo_timers::future::sleep;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn empty_submit_is_blocked_before_any_request() {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some("/feedback/add"))
        .unwrap();
    let document = window.document().unwrap();

    leptos::mount_to_body(App);
    sleep(Duration::from_millis(100)).await;

    let button = document
        .query_selector("button[type='submit']")
        .unwrap()
        .expect("submit button should render");
    button.unchecked_into::<web_sys::HtmlElement>().click();
    sleep(Duration::from_millis(100)).await;

    // Validation gates the write: every field error is on screen and no
    // navigation happened (a successful save would have gone to the list).
    let text = document.body().unwrap().text_content().unwrap_or_default();
    assert!(text.contains("Name is required"), "{text}");
    assert!(text.contains("Email is required"), "{text}");
    assert!(text.contains("Message is required"), "{text}");
    assert!(text.contains("Rating is required"), "{text}");
    assert_eq!(window.location().pathname().unwrap(), "/feedback/add");
}
