/// Delete confirmation view. Fetches the record so the user can see what
/// they are about to remove, requires an explicit confirm, and keeps the
/// confirm button disabled while the DELETE is in flight.
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::{use_navigate, use_params_map, A};

use crate::api::{ApiError, FeedbackApi};
use crate::models::feedback::Feedback;
use crate::utils::owner::with_owner_safe;

#[derive(Clone, PartialEq)]
enum DeletePhase {
    Loading,
    Ready(Feedback),
    Errored(String),
}

#[component]
pub fn FeedbackDelete() -> impl IntoView {
    let api = expect_context::<FeedbackApi>();
    let params = use_params_map();
    let navigate = use_navigate();
    let owner = Owner::current();

    let record_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u64>().ok()))
    });

    let (phase, set_phase) = create_signal(DeletePhase::Loading);
    let (deleting, set_deleting) = create_signal(false);
    let (error_message, set_error_message) = create_signal(None::<String>);
    let generation = create_rw_signal(0u64);

    {
        let api = api.clone();
        create_effect(move |_| {
            let id = record_id.get();
            let token = generation.get_untracked() + 1;
            generation.set_untracked(token);
            set_phase.set(DeletePhase::Loading);

            let api = api.clone();
            spawn_local(async move {
                let result = match id {
                    Some(id) => api.get(id).await,
                    None => Err(ApiError::NotFound),
                };
                let Some(owner) = owner else { return };
                with_owner_safe(owner, "feedback delete fetch", move || {
                    if generation.get_untracked() != token {
                        return;
                    }
                    match result {
                        Ok(record) => set_phase.set(DeletePhase::Ready(record)),
                        Err(ApiError::NotFound) => {
                            set_phase.set(DeletePhase::Errored("Feedback not found.".to_string()));
                        }
                        Err(err) => {
                            error!("[DELETE] Failed to load feedback: {}", err);
                            set_phase.set(DeletePhase::Errored(
                                "Failed to load feedback. Please try again.".to_string(),
                            ));
                        }
                    }
                });
            });
        });
    }

    let on_confirm = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = record_id.get_untracked() else {
                return;
            };
            set_deleting.set(true);
            set_error_message.set(None);

            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api.delete(id).await;
                let Some(owner) = owner else { return };
                with_owner_safe(owner, "feedback delete", move || match result {
                    Ok(()) => {
                        log!("[DELETE] Deleted feedback {}", id);
                        navigate("/", Default::default());
                    }
                    Err(err) => {
                        // Retryable: re-enable the confirm button and stay here.
                        error!("[DELETE] Failed to delete feedback {}: {}", id, err);
                        set_error_message
                            .set(Some("Failed to delete feedback. Please try again.".to_string()));
                        set_deleting.set(false);
                    }
                });
            });
        }
    };

    view! {
        {move || match phase.get() {
            DeletePhase::Loading => {
                view! {
                    <div class="text-center py-5">
                        <div class="spinner-border text-primary" role="status">
                            <span class="visually-hidden">"Loading..."</span>
                        </div>
                    </div>
                }
                    .into_view()
            }
            DeletePhase::Errored(message) => {
                view! {
                    <div class="d-flex justify-content-center align-items-center" style="min-height: 60vh;">
                        <div
                            class="card shadow-lg border-0 p-4"
                            style="max-width: 500px; width: 100%; border-radius: 15px;"
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
            DeletePhase::Ready(record) => {
                let cancel_href = format!("/feedback/{}", record.id);
                let confirm = on_confirm.clone();
                view! {
                    <div class="d-flex justify-content-center align-items-center" style="min-height: 60vh;">
                        <div
                            class="card shadow-lg border-0 p-4"
                            style="max-width: 500px; width: 100%; border-radius: 15px;"
                        >
                            <div class="card-body text-center">
                                <h3 class="fw-semibold text-danger mb-3">
                                    <i class="bi bi-exclamation-triangle-fill me-2"></i>
                                    " Confirm Deletion"
                                </h3>
                                <p class="mb-4 text-muted">
                                    "Are you sure you want to permanently delete feedback from "
                                    <strong class="text-dark">{record.name.clone()}</strong>
                                    {format!(" (Rating: {})?", record.rating)}
                                </p>

                                {move || {
                                    error_message
                                        .get()
                                        .map(|message| {
                                            view! {
                                                <div class="alert alert-danger mb-3" role="alert">
                                                    {message}
                                                </div>
                                            }
                                        })
                                }}

                                <div class="d-flex justify-content-center gap-3">
                                    <button
                                        class="btn btn-danger px-4"
                                        type="button"
                                        on:click=confirm
                                        disabled=move || deleting.get()
                                    >
                                        {move || {
                                            if deleting.get() {
                                                view! {
                                                    <span
                                                        class="spinner-border spinner-border-sm me-2"
                                                        role="status"
                                                        aria-hidden="true"
                                                    ></span>
                                                    "Deleting..."
                                                }
                                                    .into_view()
                                            } else {
                                                view! {
                                                    <i class="bi bi-trash3-fill me-1"></i>
                                                    " Yes, Delete"
                                                }
                                                    .into_view()
                                            }
                                        }}
                                    </button>
                                    <A href=cancel_href class="btn btn-outline-secondary px-4">
                                        <i class="bi bi-x-circle me-1"></i>
                                        " Cancel"
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
