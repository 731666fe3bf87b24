use chrono::{Datelike, Utc};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let current_year = Utc::now().year();

    view! {
        <footer class="text-center py-3">
            <p class="mb-0">
                {format!("© {current_year} Feedback Collection System | Made with ❤️ using Leptos")}
            </p>
        </footer>
    }
}
