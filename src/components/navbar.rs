use leptos::*;
use leptos_router::use_location;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let link_class = move |path: &'static str| {
        if location.pathname.get() == path {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="navbar navbar-expand-lg">
            <div class="container">
                <a href="/" class="navbar-brand fw-bold">"💬 Feedback Portal"</a>
                <div class="collapse navbar-collapse justify-content-end show">
                    <ul class="navbar-nav">
                        <li class="nav-item">
                            <a href="/" class=move || link_class("/")>
                                "View Feedback"
                            </a>
                        </li>
                        <li class="nav-item">
                            <a href="/feedback/add" class=move || link_class("/feedback/add")>
                                "Submit Feedback"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
