//! Shared route-guard behavior for pages that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same rule: wait until the session is
//! known, then bounce unauthenticated visitors to the login view carrying
//! the originally requested path, so a successful login can return there.
//! While the session is still `Unknown` the guard does nothing and the page
//! shows its own loading placeholder.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionStore;

/// Redirect to the login view whenever the session has resolved without a
/// signed-in user. `from` is the path of the guarded page, carried as a
/// query parameter for [`return_path`] to pick up after login.
pub fn install_unauth_redirect<F>(store: SessionStore, from: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let session = store.session();
        if session.is_known() && !session.is_authenticated() {
            navigate(&login_redirect_target(&from), NavigateOptions::default());
        }
    });
}

/// Login-view URL preserving the originally requested path.
pub fn login_redirect_target(from: &str) -> String {
    format!("/auth/login?from={}", urlencoding::encode(from))
}

/// Path to return to after a successful login.
///
/// Only same-origin absolute paths are honored; anything else (absolute
/// URLs, protocol-relative `//`, empty or missing values) falls back to the
/// landing page.
pub fn return_path(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}
