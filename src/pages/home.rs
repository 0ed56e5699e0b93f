//! Home page: the signed-in landing screen with a login redirect guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::app_header::AppHeader;
use crate::session::use_session;

/// Home page — shows the workspace landing content for the signed-in
/// user. Redirects to `/login` once session resolution has settled with
/// no user.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        if !session.is_loading() && session.current_user().is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="home-page">
            <AppHeader/>
            <main class="home-page__content">
                <Show when=move || session.last_error().is_some()>
                    <p class="notice notice--error">
                        {move || session.last_error().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || session.current_user().is_some()>
                    <h2 class="home-page__greeting">
                        {move || {
                            session
                                .current_user()
                                .map(|user| format!("Welcome back, {}.", user.name))
                                .unwrap_or_default()
                        }}
                    </h2>
                    <p class="home-page__hint">
                        "Your workspace is ready. Pick up where you left off."
                    </p>
                </Show>
            </main>
        </div>
    }
}
