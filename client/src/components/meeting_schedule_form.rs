//! Meeting schedule step: chairperson, host, participants, submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard shell mounts this component once a slot is picked and passes
//! the slot as `context`. The component owns a `MeetingBookingForm` signal,
//! fetches the directory once on mount, and hands the booking response to
//! `on_success` untouched. `on_back` returns to the slot picker.
//!
//! DESIGN
//! ======
//! Dropdowns open on focus and close on blur, `Escape`, or a pick. Blur also
//! covers clicks anywhere outside the picker, since a dropdown is only ever
//! open while its input has focus.

use leptos::prelude::*;
use meeting_booking::{BookingContext, Candidate, DropdownKind, FieldErrors, FormConfig, MeetingBookingForm, MountGuard};
use serde_json::Value;

use crate::components::candidate_dropdown::CandidateDropdown;
use crate::components::participant_chips::ParticipantChips;
use crate::components::toast::ToastBanner;
use crate::state::form::FormSignal;
use crate::state::toast::ToastState;
use crate::util::keys::{self, FieldKey};
use crate::util::labels;

/// The meeting schedule form.
///
/// `config` defaults to [`FormConfig::default`] (API under `/api`).
#[component]
pub fn MeetingScheduleForm(
    #[prop(into)] context: Signal<BookingContext>,
    on_back: Callback<()>,
    on_success: Callback<Value>,
    #[prop(optional)] config: Option<FormConfig>,
) -> impl IntoView {
    let config = StoredValue::new(config.unwrap_or_default());
    let form = FormSignal::new();
    let toast = RwSignal::new(ToastState::default());

    let guard = MountGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.unmount());
    }

    // Fetch the directory once on mount.
    #[cfg(feature = "hydrate")]
    {
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let api = crate::net::api::BrowserBookingApi::new(&config);
            let load = meeting_booking::load_directory(&form, &api, &config, &guard).await;
            log::debug!("directory fetch settled: {load:?}");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = guard;
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.signal().with_untracked(MeetingBookingForm::is_submitting) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use meeting_booking::{SubmitOutcome, Submitter};

            let config = config.get_value();
            let context = context.get_untracked();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::BrowserBookingApi::new(&config);
                let outcome = Submitter::new(&api, &config)
                    .submit(&form, &context, |value| on_success.run(value))
                    .await;
                match outcome {
                    SubmitOutcome::Booked => {}
                    SubmitOutcome::Failed(message) => {
                        crate::components::toast::raise_toast(toast, message, config.toast_dismiss_ms);
                    }
                    SubmitOutcome::Rejected(reason) => log::debug!("submit not started: {reason}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, context, on_success, toast);
        }
    };

    let status = Signal::derive(move || form.read(MeetingBookingForm::directory_status));
    let submitting = Signal::derive(move || form.read(MeetingBookingForm::is_submitting));
    let chair_suggestions = Signal::derive(move || {
        form.read(|f| f.chairperson_suggestions().into_iter().cloned().collect::<Vec<_>>())
    });
    let participant_suggestions = Signal::derive(move || {
        form.read(|f| f.participant_suggestions().into_iter().cloned().collect::<Vec<_>>())
    });
    let participant_emails = Signal::derive(move || form.read(|f| f.participants().as_slice().to_vec()));

    let on_pick_chair = Callback::new(move |candidate: Candidate| {
        form.apply(|f| f.resolve_chairperson(&candidate));
    });
    let on_pick_participant = Callback::new(move |candidate: Candidate| {
        form.apply(|f| {
            f.add_participant_candidate(&candidate);
        });
    });
    let on_remove_participant = Callback::new(move |email: String| {
        form.apply(|f| {
            f.remove_participant(&email);
        });
    });

    let field_error = move |pick: fn(&FieldErrors) -> Option<String>| {
        move || {
            form.read(|f| pick(f.field_errors()))
                .map(|msg| view! { <p class="booking-form__error">{msg}</p> })
        }
    };

    view! {
        <form class="booking-form" on:submit=on_submit novalidate=true>
            <header class="booking-form__header">
                <h2 class="booking-form__title">"Meeting details"</h2>
                <p class="booking-form__slot">
                    {move || context.with(|c| format!("{} {} - {}", c.date, c.slot_start, c.slot_end))}
                </p>
            </header>

            <div class="booking-form__field">
                <label class="booking-form__label" for="booking-chairperson">"Chairperson"</label>
                <div class="booking-form__picker">
                    <input
                        id="booking-chairperson"
                        class="booking-form__input"
                        type="text"
                        autocomplete="off"
                        placeholder="Search by name"
                        prop:value=move || form.read(|f| f.chairperson_name().to_owned())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            form.apply(|f| f.edit_chairperson(&text));
                        }
                        on:focus=move |_| form.apply(|f| f.show_dropdown(DropdownKind::Chairperson))
                        on:blur=move |_| form.apply(MeetingBookingForm::blur_chairperson)
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| match keys::classify(&ev.key()) {
                            FieldKey::Commit => {
                                ev.prevent_default();
                                form.apply(MeetingBookingForm::blur_chairperson);
                            }
                            FieldKey::Dismiss => form.apply(MeetingBookingForm::close_dropdown),
                            FieldKey::Other => {}
                        }
                    />
                    <Show when=move || form.read(|f| f.is_open(DropdownKind::Chairperson))>
                        <CandidateDropdown items=chair_suggestions status=status on_pick=on_pick_chair />
                    </Show>
                </div>
                {field_error(|e| e.chairperson_name.clone())}
            </div>

            <div class="booking-form__field">
                <label class="booking-form__label" for="booking-host-email">"Host email"</label>
                <input
                    id="booking-host-email"
                    class="booking-form__input"
                    type="email"
                    placeholder="host@example.com"
                    prop:value=move || form.read(|f| f.host_email().to_owned())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.apply(|f| f.set_host_email(&text));
                    }
                />
                {field_error(|e| e.host_email.clone())}
            </div>

            <div class="booking-form__field">
                <label class="booking-form__label" for="booking-participant">"Participants"</label>
                <div class="booking-form__picker">
                    <div class="booking-form__row">
                        <input
                            id="booking-participant"
                            class="booking-form__input"
                            type="text"
                            autocomplete="off"
                            placeholder="name@example.com"
                            prop:value=move || form.read(|f| f.participant_input().to_owned())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                form.apply(|f| f.set_participant_input(&text));
                            }
                            on:focus=move |_| form.apply(|f| f.show_dropdown(DropdownKind::Participant))
                            on:blur=move |_| {
                                form.apply(|f| {
                                    if f.is_open(DropdownKind::Participant) {
                                        f.close_dropdown();
                                    }
                                });
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| match keys::classify(&ev.key()) {
                                FieldKey::Commit => {
                                    ev.prevent_default();
                                    form.apply(|f| {
                                        f.commit_participant_input();
                                    });
                                }
                                FieldKey::Dismiss => form.apply(MeetingBookingForm::close_dropdown),
                                FieldKey::Other => {}
                            }
                        />
                        <button
                            class="btn booking-form__add"
                            type="button"
                            on:click=move |_| {
                                form.apply(|f| {
                                    f.commit_participant_input();
                                });
                            }
                        >
                            "Add"
                        </button>
                    </div>
                    <Show when=move || form.read(|f| f.is_open(DropdownKind::Participant))>
                        <CandidateDropdown
                            items=participant_suggestions
                            status=status
                            on_pick=on_pick_participant
                        />
                    </Show>
                </div>
                <ParticipantChips emails=participant_emails on_remove=on_remove_participant />
                {field_error(|e| e.participants.clone())}
            </div>

            <div class="booking-form__actions">
                <button class="btn" type="button" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || labels::submit_label(submitting.get())}
                </button>
            </div>

            <ToastBanner toast=toast />
        </form>
    }
}
