/// List view: filterable, paginated feedback cards.
/// Refetches whenever the applied filters or the page change; name
/// keystrokes are debounced so a typing burst issues one request.
use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::A;

use crate::api::{FeedbackApi, ListFilters};
use crate::models::feedback::{Feedback, PAGE_SIZE};
use crate::utils::owner::with_owner_safe;

#[derive(Clone, Copy, PartialEq)]
enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[component]
pub fn FeedbackList() -> impl IntoView {
    let api = expect_context::<FeedbackApi>();
    let owner = Owner::current();

    let (records, set_records) = create_signal(Vec::<Feedback>::new());
    let (phase, set_phase) = create_signal(ListPhase::Idle);
    let (error_message, set_error_message) = create_signal(None::<String>);
    let (filters, set_filters) = create_signal(ListFilters::default());
    let (page, set_page) = create_signal(1u32);
    let (count, set_count) = create_signal(0u64);
    let (has_next, set_has_next) = create_signal(false);
    let (has_previous, set_has_previous) = create_signal(false);

    // Bumped on every fetch; a response only applies while its token is
    // still the latest one.
    let generation = create_rw_signal(0u64);

    create_effect(move |prev: Option<(ListFilters, u32)>| {
        let current_filters = filters.get();
        let current_page = page.get();
        // A changed name filter means the user is typing; wait out the burst.
        let debounce = prev.is_some_and(|(prev_filters, _)| prev_filters.name != current_filters.name);

        let token = generation.get_untracked() + 1;
        generation.set_untracked(token);
        set_phase.set(ListPhase::Loading);

        let api = api.clone();
        let request_filters = current_filters.clone();
        spawn_local(async move {
            if debounce {
                gloo_timers::future::sleep(Duration::from_millis(250)).await;
                if generation.try_get_untracked() != Some(token) {
                    return;
                }
            }
            let result = api.list(&request_filters, current_page).await;
            let Some(owner) = owner else { return };
            with_owner_safe(owner, "feedback list fetch", move || {
                if generation.get_untracked() != token {
                    log!("[LIST] Dropping superseded response for page {}", current_page);
                    return;
                }
                match result {
                    Ok(page_data) => {
                        set_count.set(page_data.count);
                        set_has_next.set(page_data.has_next);
                        set_has_previous.set(page_data.has_previous);
                        set_records.set(page_data.items);
                        set_error_message.set(None);
                        set_phase.set(ListPhase::Loaded);
                    }
                    Err(err) => {
                        error!("[LIST] Failed to load feedback: {}", err);
                        // Keep whatever was on screen; only the banner changes.
                        set_error_message
                            .set(Some("Failed to load feedback. Please try again.".to_string()));
                        set_phase.set(ListPhase::Errored);
                    }
                }
            });
        });

        (current_filters, current_page)
    });

    let on_name_input = move |ev| {
        batch(move || {
            set_filters.update(|f| f.name = event_target_value(&ev));
            set_page.set(1);
        });
    };
    let on_rating_change = move |ev| {
        batch(move || {
            set_filters.update(|f| f.rating = event_target_value(&ev));
            set_page.set(1);
        });
    };
    let on_filter_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_page.set(1);
    };
    let on_reset = move |_| {
        batch(move || {
            set_filters.set(ListFilters::default());
            set_page.set(1);
        });
    };
    let on_previous = move |_| {
        if has_previous.get_untracked() {
            set_page.update(|p| *p = p.saturating_sub(1).max(1));
        }
    };
    let on_next = move |_| {
        if has_next.get_untracked() {
            set_page.update(|p| *p += 1);
        }
    };

    let total_pages = move || count.get().div_ceil(PAGE_SIZE);

    view! {
        <div class="container py-3">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h3 class="fw-semibold text-primary mb-0">
                    <i class="bi bi-chat-left-dots-fill me-2"></i>
                    " User Feedback"
                </h3>
                <A href="/feedback/add" class="btn btn-success">
                    <i class="bi bi-plus-circle me-1"></i>
                    " Add Feedback"
                </A>
            </div>

            {move || {
                error_message
                    .get()
                    .map(|message| {
                        view! {
                            <div class="alert alert-danger alert-dismissible fade show" role="alert">
                                {message}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| set_error_message.set(None)
                                ></button>
                            </div>
                        }
                    })
            }}

            <form on:submit=on_filter_submit class="row g-2 align-items-center mb-4">
                <div class="col-md-6">
                    <input
                        type="text"
                        name="name"
                        class="form-control"
                        placeholder="Search by name"
                        prop:value=move || filters.with(|f| f.name.clone())
                        on:input=on_name_input
                    />
                </div>
                <div class="col-md-3">
                    <select
                        name="rating"
                        class="form-select"
                        prop:value=move || filters.with(|f| f.rating.clone())
                        on:change=on_rating_change
                    >
                        <option value="">"All ratings"</option>
                        {(1..=5)
                            .map(|r| {
                                view! { <option value=r.to_string()>{format!("{r} ⭐")}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="col-md-3 d-flex">
                    <button type="submit" class="btn btn-primary me-2">"Filter"</button>
                    <button type="button" class="btn btn-outline-secondary" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </form>

            {move || {
                let loading_blank = matches!(phase.get(), ListPhase::Idle | ListPhase::Loading)
                    && records.with(|r| r.is_empty());
                if loading_blank {
                    return view! {
                        <div class="text-center py-5">
                            <div class="spinner-border text-primary" role="status">
                                <span class="visually-hidden">"Loading..."</span>
                            </div>
                        </div>
                    }
                        .into_view();
                }
                if records.with(|r| r.is_empty()) {
                    return view! {
                        <div class="text-center py-5">
                            <i class="bi bi-inbox text-secondary" style="font-size: 3rem;"></i>
                            <p class="text-muted mb-2 mt-3">"No feedback yet."</p>
                            <A href="/feedback/add" class="btn btn-outline-primary">
                                <i class="bi bi-plus-circle me-1"></i>
                                " Add the first feedback"
                            </A>
                        </div>
                    }
                        .into_view();
                }

                let pagination = (has_next.get() || has_previous.get())
                    .then(|| {
                        let previous_disabled = !has_previous.get();
                        let next_disabled = !has_next.get();
                        view! {
                            <nav aria-label="Page navigation" class="mt-4">
                                <ul class="pagination justify-content-center">
                                    <li class=format!(
                                        "page-item {}",
                                        if previous_disabled { "disabled" } else { "" },
                                    )>
                                        <button
                                            class="page-link"
                                            disabled=previous_disabled
                                            on:click=on_previous
                                        >
                                            <i class="bi bi-arrow-left"></i>
                                            " Previous"
                                        </button>
                                    </li>
                                    <li class="page-item disabled">
                                        <span class="page-link">
                                            {format!("Page {} of {}", page.get(), total_pages())}
                                        </span>
                                    </li>
                                    <li class=format!(
                                        "page-item {}",
                                        if next_disabled { "disabled" } else { "" },
                                    )>
                                        <button
                                            class="page-link"
                                            disabled=next_disabled
                                            on:click=on_next
                                        >
                                            "Next "
                                            <i class="bi bi-arrow-right"></i>
                                        </button>
                                    </li>
                                </ul>
                            </nav>
                        }
                    });

                view! {
                    <div class="row g-4">
                        {records
                            .get()
                            .into_iter()
                            .map(|record| {
                                let detail_href = format!("/feedback/{}", record.id);
                                let preview = record.message_preview();
                                let submitted = record.submitted_on();
                                view! {
                                    <div class="col-md-6 col-lg-4">
                                        <A href=detail_href class="text-decoration-none">
                                            <div class="card h-100 border-0 shadow-sm feedback-card p-3">
                                                <div class="d-flex justify-content-between align-items-start">
                                                    <div>
                                                        <h5 class="fw-semibold text-dark mb-1">
                                                            {record.name.clone()}
                                                        </h5>
                                                        <p class="text-muted small mb-2">
                                                            {record.email.clone()}
                                                        </p>
                                                    </div>
                                                    <span class="badge bg-primary rounded-pill px-3 py-2">
                                                        {format!("⭐ {}", record.rating)}
                                                    </span>
                                                </div>
                                                <p class="text-muted small mb-3">{preview}</p>
                                                <div class="text-end">
                                                    <small class="text-secondary">
                                                        <i class="bi bi-clock me-1"></i>
                                                        {submitted}
                                                    </small>
                                                </div>
                                            </div>
                                        </A>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    {pagination}
                }
                    .into_view()
            }}
        </div>
    }
}
