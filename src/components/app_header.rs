//! Top application header with the current user and a sign-out button.

use leptos::prelude::*;

use crate::session::use_session;

/// Header shown on signed-in screens.
///
/// A failed sign-out keeps the user signed in; the failure is logged and
/// left visible through the session's last-error field.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = use_session();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.sign_out().await {
                Ok(()) => {
                    // Full reload so the next mount starts from a clean slate.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("sign out failed: {e}");
                    signing_out.set(false);
                }
            }
        });
    };

    view! {
        <header class="app-header">
            <span class="app-header__brand">"Meridian"</span>
            <span class="app-header__spacer"></span>
            <Show when=move || session.current_user().is_some()>
                <span class="app-header__user">
                    {move || session.current_user().map(|user| user.name).unwrap_or_default()}
                </span>
                <button
                    class="app-header__sign-out"
                    on:click=on_sign_out
                    disabled=move || signing_out.get()
                >
                    {move || if signing_out.get() { "Signing out..." } else { "Sign out" }}
                </button>
            </Show>
        </header>
    }
}
