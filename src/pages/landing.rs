//! Public landing page with session-aware navigation links.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn LandingPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    view! {
        <div class="landing-page">
            <header class="landing-page__nav">
                <span class="landing-page__brand">"CareerReady AI"</span>
                <nav class="landing-page__links">
                    <Show
                        when=move || store.session().is_authenticated()
                        fallback=|| {
                            view! {
                                <a class="landing-page__link" href="/auth/login">
                                    "Sign In"
                                </a>
                                <a class="landing-page__link landing-page__link--primary" href="/auth/signup">
                                    "Get Started"
                                </a>
                            }
                        }
                    >
                        <a class="landing-page__link landing-page__link--primary" href="/dashboard">
                            "Open Dashboard"
                        </a>
                    </Show>
                </nav>
            </header>
            <main class="landing-page__hero">
                <h1>"Get career-ready with AI"</h1>
                <p>
                    "Practice interviews, sharpen your resume, and track your progress in one workspace."
                </p>
                <a class="landing-page__cta" href="/auth/signup">
                    "Create your account"
                </a>
            </main>
        </div>
    }
}
