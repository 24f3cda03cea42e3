//! Signed-in home page behind the unauthenticated-redirect guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::guard::install_unauth_redirect;

/// Dashboard page, only meaningful with a signed-in user.
/// Unauthenticated visitors are bounced to the login view with a `from`
/// parameter pointing back here.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    install_unauth_redirect(store, "/dashboard".to_owned(), navigate);

    let greeting = move || {
        let session = store.session();
        match session.user().and_then(|user| user.display_name()) {
            Some(who) => format!("Welcome back, {who}."),
            None => "Welcome back.".to_owned(),
        }
    };
    let account_email = move || {
        let session = store.session();
        session
            .user()
            .and_then(|user| user.field_str("email"))
            .map(str::to_owned)
    };

    // Logout clears the session synchronously; the guard effect above then
    // handles navigation to the login view.
    let on_logout = move |_| store.logout();

    view! {
        <div class="dashboard-page">
            <Show
                when=move || store.session().is_known()
                fallback=|| view! { <p class="dashboard-page__loading">"Loading session..."</p> }
            >
                <header class="dashboard-page__header">
                    <h1>{greeting}</h1>
                    <button class="dashboard-page__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </header>
                <section class="dashboard-page__body">
                    <p>"Your career workspace is ready."</p>
                    <Show when=move || account_email().is_some()>
                        <p class="dashboard-page__account">
                            "Signed in as "
                            <span>{move || account_email().unwrap_or_default()}</span>
                        </p>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
