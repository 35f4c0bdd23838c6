//! Dismissible failure toast.

use leptos::prelude::*;
use meeting_booking::Toast;

use crate::state::toast::ToastState;

/// Show `message` and schedule its auto-dismiss.
pub fn raise_toast(toast: RwSignal<ToastState>, message: Toast, dismiss_ms: u32) {
    let Some(seq) = toast.try_update(|t| t.show(message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(dismiss_ms).await;
            toast.try_update(|t| t.expire(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, dismiss_ms);
    }
}

#[component]
pub fn ToastBanner(toast: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <Show when=move || toast.with(|t| t.current().is_some())>
            <div class="toast toast--error" role="alert">
                <span class="toast__message">{move || toast.with(|t| t.message().unwrap_or_default())}</span>
                <button
                    class="toast__dismiss"
                    type="button"
                    aria-label="Dismiss"
                    on:click=move |_| toast.update(ToastState::dismiss)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
