//! Removable chips for the participant emails added so far.

use leptos::prelude::*;

#[component]
pub fn ParticipantChips(#[prop(into)] emails: Signal<Vec<String>>, on_remove: Callback<String>) -> impl IntoView {
    view! {
        <ul class="participant-chips">
            {move || {
                emails
                    .get()
                    .into_iter()
                    .map(|email| {
                        let aria = format!("Remove {email}");
                        let label = email.clone();
                        view! {
                            <li class="participant-chips__chip">
                                <span class="participant-chips__email">{label}</span>
                                <button
                                    class="participant-chips__remove"
                                    type="button"
                                    aria-label=aria
                                    on:click=move |_| on_remove.run(email.clone())
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
