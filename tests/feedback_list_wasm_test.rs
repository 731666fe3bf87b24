#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use feedbackware::app::App;
use gloo_timers::future::sleep;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn list_failure_shows_the_banner_and_keeps_the_view() {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some("/"))
        .unwrap();
    let document = window.document().unwrap();

    // The default base URL points at a backend that is not running in the
    // test browser, so the initial fetch fails and the view must recover
    // into its errored state instead of crashing.
    leptos::mount_to_body(App);
    sleep(Duration::from_millis(600)).await;

    let text = document.body().unwrap().text_content().unwrap_or_default();
    assert!(text.contains("User Feedback"), "{text}");
    assert!(
        text.contains("Failed to load feedback. Please try again."),
        "{text}"
    );
    assert!(text.contains("No feedback yet."), "{text}");
}
