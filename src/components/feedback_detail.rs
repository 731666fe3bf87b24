/// Detail view for a single feedback record. Fetches by id on entry; a
/// failed fetch is terminal for this view and only offers the way back.
use leptos::logging::error;
use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api::{ApiError, FeedbackApi};
use crate::components::star_rating::StarRating;
use crate::models::feedback::Feedback;
use crate::utils::owner::with_owner_safe;

#[derive(Clone, PartialEq)]
enum DetailPhase {
    Loading,
    Ready(Feedback),
    Errored(String),
}

#[component]
pub fn FeedbackDetail() -> impl IntoView {
    let api = expect_context::<FeedbackApi>();
    let params = use_params_map();
    let owner = Owner::current();

    let (phase, set_phase) = create_signal(DetailPhase::Loading);
    let generation = create_rw_signal(0u64);

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<u64>().ok()));
        let token = generation.get_untracked() + 1;
        generation.set_untracked(token);
        set_phase.set(DetailPhase::Loading);

        let api = api.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api.get(id).await,
                None => Err(ApiError::NotFound),
            };
            let Some(owner) = owner else { return };
            with_owner_safe(owner, "feedback detail fetch", move || {
                if generation.get_untracked() != token {
                    return;
                }
                match result {
                    Ok(record) => set_phase.set(DetailPhase::Ready(record)),
                    Err(ApiError::NotFound) => {
                        set_phase.set(DetailPhase::Errored("Feedback not found.".to_string()));
                    }
                    Err(err) => {
                        error!("[DETAIL] Failed to load feedback: {}", err);
                        set_phase.set(DetailPhase::Errored(
                            "Failed to load feedback. Please try again.".to_string(),
                        ));
                    }
                }
            });
        });
    });

    view! {
        {move || match phase.get() {
            DetailPhase::Loading => {
                view! {
                    <div class="text-center py-5">
                        <div class="spinner-border text-primary" role="status">
                            <span class="visually-hidden">"Loading..."</span>
                        </div>
                    </div>
                }
                    .into_view()
            }
            DetailPhase::Errored(message) => {
                view! {
                    <div class="d-flex justify-content-center">
                        <div
                            class="card shadow-lg border-0 p-4"
                            style="max-width: 700px; width: 100%; border-radius: 15px;"
                        >
                            <div class="card-body text-center">
                                <p class="text-danger">{message}</p>
                                <A href="/" class="btn btn-primary">"Back to List"</A>
                            </div>
                        </div>
                    </div>
                }
                    .into_view()
            }
            DetailPhase::Ready(record) => {
                let edit_href = format!("/feedback/{}/edit", record.id);
                let delete_href = format!("/feedback/{}/delete", record.id);
                let mailto = format!("mailto:{}", record.email);
                let message_lines = record
                    .message
                    .lines()
                    .map(|line| {
                        let line = line.to_string();
                        view! {
                            {line}
                            <br/>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="d-flex justify-content-center">
                        <div
                            class="card shadow-lg border-0 p-4"
                            style="max-width: 700px; width: 100%; border-radius: 15px;"
                        >
                            <div class="card-body">
                                <h3 class="fw-semibold text-center mb-4">
                                    <i class="bi bi-chat-left-text-fill text-primary me-2"></i>
                                    {format!("Feedback from {}", record.name)}
                                </h3>

                                <dl class="row mb-4">
                                    <dt class="col-sm-4 text-muted">"👤 Name"</dt>
                                    <dd class="col-sm-8 fw-medium text-dark">{record.name.clone()}</dd>

                                    <dt class="col-sm-4 text-muted">"📧 Email"</dt>
                                    <dd class="col-sm-8">
                                        <a href=mailto class="text-decoration-none">
                                            {record.email.clone()}
                                        </a>
                                    </dd>

                                    <dt class="col-sm-4 text-muted">"⭐ Rating"</dt>
                                    <dd class="col-sm-8">
                                        <StarRating rating=record.rating/>
                                    </dd>

                                    <dt class="col-sm-4 text-muted">"💬 Message"</dt>
                                    <dd class="col-sm-8">
                                        <div class="p-3 bg-light border rounded">{message_lines}</div>
                                    </dd>

                                    <dt class="col-sm-4 text-muted">"🕒 Submitted On"</dt>
                                    <dd class="col-sm-8">{record.submitted_on()}</dd>
                                </dl>

                                <div class="d-flex justify-content-center gap-3">
                                    <A href=edit_href class="btn btn-primary px-4">
                                        <i class="bi bi-pencil-square me-1"></i>
                                        " Edit"
                                    </A>
                                    <A href=delete_href class="btn btn-danger px-4">
                                        <i class="bi bi-trash3-fill me-1"></i>
                                        " Delete"
                                    </A>
                                    <A href="/" class="btn btn-outline-secondary px-4">
                                        <i class="bi bi-arrow-left-circle me-1"></i>
                                        " Back to List"
                                    </A>
                                </div>
                            </div>
                        </div>
                    </div>
                }
                    .into_view()
            }
        }}
    }
}
