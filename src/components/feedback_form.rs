/// Create/edit form. One component for both modes, keyed on the `:id` route
/// param: with an id it pre-fetches the record and submits a PUT, without
/// one it submits a POST. Local validation gates every submit; a 400 from
/// the backend overwrites local errors since the server sees conflicts the
/// client cannot.
use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::{use_navigate, use_params_map, A};

use crate::api::{ApiError, FeedbackApi};
use crate::utils::owner::with_owner_safe;
use crate::validation::{validate, DraftForm, FieldErrors};

const FORM_FIELDS: [&str; 4] = ["name", "email", "rating", "message"];

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let api = expect_context::<FeedbackApi>();
    let params = use_params_map();
    let navigate = use_navigate();
    let owner = Owner::current();

    let edit_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u64>().ok()))
    });

    let (form, set_form) = create_signal(DraftForm::default());
    let (errors, set_errors) = create_signal(FieldErrors::new());
    let (banner, set_banner) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);
    let (loading_record, set_loading_record) = create_signal(edit_id.get_untracked().is_some());
    let generation = create_rw_signal(0u64);

    // Edit mode pre-populates the draft verbatim; if that fetch fails there
    // is no record to edit, so the user goes back to the list.
    {
        let api = api.clone();
        let navigate = navigate.clone();
        create_effect(move |_| {
            let Some(id) = edit_id.get() else {
                set_loading_record.set(false);
                return;
            };
            let token = generation.get_untracked() + 1;
            generation.set_untracked(token);
            set_loading_record.set(true);
            set_errors.set(FieldErrors::new());
            set_banner.set(None);

            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api.get(id).await;
                let Some(owner) = owner else { return };
                with_owner_safe(owner, "feedback edit prefetch", move || {
                    if generation.get_untracked() != token {
                        return;
                    }
                    match result {
                        Ok(record) => {
                            set_form.set(DraftForm::from_record(&record));
                            set_loading_record.set(false);
                        }
                        Err(err) => {
                            error!("[FORM] Failed to load feedback {}: {}", id, err);
                            navigate("/", Default::default());
                        }
                    }
                });
            });
        });
    }

    let on_name = move |ev| {
        set_form.update(|f| f.name = event_target_value(&ev));
        set_errors.update(|e| {
            e.remove("name");
        });
    };
    let on_email = move |ev| {
        set_form.update(|f| f.email = event_target_value(&ev));
        set_errors.update(|e| {
            e.remove("email");
        });
    };
    let on_rating = move |ev| {
        set_form.update(|f| f.rating = event_target_value(&ev));
        set_errors.update(|e| {
            e.remove("rating");
        });
    };
    let on_message = move |ev| {
        set_form.update(|f| f.message = event_target_value(&ev));
        set_errors.update(|e| {
            e.remove("message");
        });
    };

    let on_submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let current = form.get_untracked();
            let found = validate(&current);
            if !found.is_empty() {
                set_errors.set(found);
                return;
            }
            let Some(draft) = current.to_draft() else {
                return;
            };

            set_errors.set(FieldErrors::new());
            set_banner.set(None);
            set_saving.set(true);

            let api = api.clone();
            let navigate = navigate.clone();
            let id = edit_id.get_untracked();
            spawn_local(async move {
                let result = match id {
                    Some(id) => api.update(id, &draft).await,
                    None => api.create(&draft).await,
                };
                let Some(owner) = owner else { return };
                with_owner_safe(owner, "feedback save", move || match result {
                    Ok(record) => {
                        log!("[FORM] Saved feedback {}", record.id);
                        navigate("/", Default::default());
                    }
                    Err(ApiError::Validation(server_errors)) => {
                        let (field_errors, other): (FieldErrors, FieldErrors) = server_errors
                            .into_iter()
                            .partition(|(field, _)| FORM_FIELDS.contains(&field.as_str()));
                        if !other.is_empty() {
                            set_banner
                                .set(Some(other.into_values().collect::<Vec<_>>().join(" ")));
                        }
                        set_errors.set(field_errors);
                        set_saving.set(false);
                    }
                    Err(err) => {
                        error!("[FORM] Failed to save feedback: {}", err);
                        set_banner
                            .set(Some("Failed to save feedback. Please try again.".to_string()));
                        set_saving.set(false);
                    }
                });
            });
        }
    };

    let field_error = move |field: &'static str| errors.with(|e| e.get(field).cloned());
    let control_class = move |field: &'static str| {
        if errors.with(|e| e.contains_key(field)) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };

    view! {
        {move || {
            if loading_record.get() {
                return view! {
                    <div class="text-center py-5">
                        <div class="spinner-border text-primary" role="status">
                            <span class="visually-hidden">"Loading..."</span>
                        </div>
                    </div>
                }
                    .into_view();
            }
            let submit = on_submit.clone();
            view! {
                <div class="feedback-wrapper py-5">
                    <div class="feedback-card card shadow-lg border-0 p-4 mx-auto" style="max-width: 650px;">
                        <h2 class="fw-bold text-center mb-4">
                            {if edit_id.get().is_some() { "✏️ Edit Feedback" } else { "💬 Add Feedback" }}
                        </h2>

                        {move || {
                            banner
                                .get()
                                .map(|message| {
                                    view! {
                                        <div class="alert alert-danger" role="alert">
                                            {message}
                                        </div>
                                    }
                                })
                        }}

                        <form on:submit=submit>
                            <div class="mb-3">
                                <label class="form-label fw-semibold">"Full Name"</label>
                                <input
                                    type="text"
                                    name="name"
                                    class=move || control_class("name")
                                    placeholder="Your full name"
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=on_name
                                />
                                {move || {
                                    field_error("name")
                                        .map(|message| {
                                            view! {
                                                <div class="invalid-feedback d-block">{message}</div>
                                            }
                                        })
                                }}
                            </div>

                            <div class="mb-3">
                                <label class="form-label fw-semibold">"Email Address"</label>
                                <input
                                    type="email"
                                    name="email"
                                    class=move || control_class("email")
                                    placeholder="you@example.com"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=on_email
                                />
                                {move || {
                                    field_error("email")
                                        .map(|message| {
                                            view! {
                                                <div class="invalid-feedback d-block">{message}</div>
                                            }
                                        })
                                }}
                            </div>

                            <div class="mb-3">
                                <label class="form-label fw-semibold">"Rating"</label>
                                <select
                                    name="rating"
                                    class=move || {
                                        if errors.with(|e| e.contains_key("rating")) {
                                            "form-select is-invalid"
                                        } else {
                                            "form-select"
                                        }
                                    }
                                    prop:value=move || form.with(|f| f.rating.clone())
                                    on:change=on_rating
                                >
                                    <option value="">"Select a rating"</option>
                                    {(1..=5)
                                        .map(|r| {
                                            view! {
                                                <option value=r.to_string()>{format!("{r} ⭐")}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                                {move || {
                                    field_error("rating")
                                        .map(|message| {
                                            view! {
                                                <div class="invalid-feedback d-block">{message}</div>
                                            }
                                        })
                                }}
                            </div>

                            <div class="mb-4">
                                <label class="form-label fw-semibold">"Message"</label>
                                <textarea
                                    name="message"
                                    rows="4"
                                    class=move || control_class("message")
                                    placeholder="Write your feedback here..."
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=on_message
                                ></textarea>
                                {move || {
                                    field_error("message")
                                        .map(|message| {
                                            view! {
                                                <div class="invalid-feedback d-block">{message}</div>
                                            }
                                        })
                                }}
                            </div>

                            <div class="d-flex justify-content-between align-items-center mt-4">
                                <A href="/" class="btn btn-outline-secondary px-4">"Cancel"</A>
                                <button
                                    type="submit"
                                    class="btn btn-primary px-4"
                                    disabled=move || saving.get()
                                >
                                    {move || {
                                        if saving.get() {
                                            "Saving..."
                                        } else if edit_id.get().is_some() {
                                            "Update"
                                        } else {
                                            "Submit"
                                        }
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
                .into_view()
        }}
    }
}
