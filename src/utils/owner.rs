use leptos::logging::log;
use leptos::Owner;

/// Runs `f` under `owner` if that owner is still alive.
/// Fetches resolve after an `.await`, by which point the view that issued
/// them may have been disposed (the user navigated away); in that case the
/// update is logged and dropped instead of touching dead signals.
pub fn with_owner_safe<F, R>(owner: Owner, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            log!("[OWNER] View disposed, dropping update: {}", log_context);
            None
        }
    }
}
