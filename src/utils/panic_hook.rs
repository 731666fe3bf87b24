use std::panic;

use leptos::logging::log;

/// Sets up a panic hook that chains the default console hook and records the
/// route the panic surfaced on. A panic right after navigation usually means
/// an async callback outlived its view.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        if let Some(window) = web_sys::window() {
            if let Ok(pathname) = window.location().pathname() {
                log!("[PANIC] Route at panic: {}", pathname);
            }
        }
    }));
}

/// Call in main.rs before mounting.
pub fn init() {
    set_custom_panic_hook();
}
