//! Suggestion list shared by the chairperson and participant pickers.

use leptos::prelude::*;
use meeting_booking::{Candidate, DirectoryStatus};

use crate::util::labels::{candidate_label, empty_suggestions_text};

/// Suggestion rows under a picker input.
///
/// Rows commit on `mousedown` with the default prevented so the input keeps
/// focus until the pick has been applied.
#[component]
pub fn CandidateDropdown(
    #[prop(into)] items: Signal<Vec<Candidate>>,
    #[prop(into)] status: Signal<DirectoryStatus>,
    on_pick: Callback<Candidate>,
) -> impl IntoView {
    view! {
        <ul class="candidate-dropdown" role="listbox">
            <Show when=move || items.with(Vec::is_empty)>
                <li class="candidate-dropdown__empty">{move || empty_suggestions_text(status.get())}</li>
            </Show>
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|candidate| {
                        let label = candidate_label(&candidate);
                        let local = candidate.is_local();
                        view! {
                            <li
                                class="candidate-dropdown__item"
                                class:candidate-dropdown__item--local=local
                                role="option"
                                on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    on_pick.run(candidate.clone());
                                }
                            >
                                {label}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
