//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for "is a user signed in."
//! It is constructed once in `App`, provided through context, and consumed
//! by route guards and pages. Operations report outcomes; navigation is
//! always the caller's decision, so the store stays testable and reusable
//! across routes.
//!
//! PERSISTENCE
//! ===========
//! The current [`UserRecord`] is mirrored to localStorage under one fixed
//! key: written on login and signup, cleared on logout, read back by
//! [`SessionStore::restore`]. Memory and the persisted copy only meet at
//! those explicit writes; there is no expiry, refresh, or cross-tab sync.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::accounts::{self, UserRecord};
use crate::util::storage;

/// localStorage key holding the serialized [`UserRecord`].
const STORAGE_KEY: &str = "user";

/// Authentication state of the current browser user.
///
/// `Unknown` is the only transient state: it holds from process start until
/// [`SessionStore::restore`] has run once. Every transition replaces the
/// whole value; there are no partial updates.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    /// Restore has not run yet; nothing is known.
    #[default]
    Unknown,
    /// A user is signed in.
    Authenticated(UserRecord),
    /// No user is signed in.
    Unauthenticated,
}

impl Session {
    /// Whether restore has resolved this session one way or the other.
    pub fn is_known(&self) -> bool {
        !matches!(self, Session::Unknown)
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// The signed-in user's payload, if any.
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Unknown | Session::Unauthenticated => None,
        }
    }
}

/// Session implied by the persisted record read out of storage.
///
/// A missing record means "no session"; unreadable records were already
/// collapsed to `None` by the storage helpers, so restore never fails
/// outward.
fn restored(stored: Option<UserRecord>) -> Session {
    match stored {
        Some(user) => Session::Authenticated(user),
        None => Session::Unauthenticated,
    }
}

/// Shared session store, dependency-injected through Leptos context.
///
/// Wraps a single `RwSignal` so the store is `Copy` and cheap to hand to
/// every consumer; all mutation goes through the operations below.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl SessionStore {
    /// New store in the `Unknown` state.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::Unknown),
        }
    }

    /// Current session snapshot; reactive when read inside effects or views.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Replace the session with whatever the persisted record says.
    ///
    /// Always completes: storage failures surface as "no session", and
    /// repeated calls against unchanged storage settle on the same state.
    pub fn restore(&self) {
        self.session.set(restored(storage::load_json(STORAGE_KEY)));
    }

    /// Sign in against the accounts service.
    ///
    /// On success the returned payload is persisted and the session becomes
    /// `Authenticated`; on failure the session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the classified, display-ready failure message.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        match accounts::login(email, password).await {
            Ok(user) => {
                self.install(user);
                Ok(())
            }
            Err(err) => {
                leptos::logging::warn!("login failed: {err:?}");
                Err(accounts::login_failure_message(&err))
            }
        }
    }

    /// Create an account and sign in as it.
    ///
    /// Same contract as [`login`](Self::login), with signup-specific
    /// failure classification (duplicate accounts, per-field validation).
    ///
    /// # Errors
    ///
    /// Returns the classified, display-ready failure message.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), String> {
        match accounts::signup(name, email, password).await {
            Ok(user) => {
                self.install(user);
                Ok(())
            }
            Err(err) => {
                leptos::logging::warn!("signup failed: {err:?}");
                Err(accounts::signup_failure_message(&err))
            }
        }
    }

    /// Sign out: notify the service best-effort in the background, then
    /// clear the persisted record and the in-memory session unconditionally.
    ///
    /// Completes synchronously; the local session never waits on (or cares
    /// about) the network.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(accounts::logout());
        storage::remove(STORAGE_KEY);
        self.session.set(Session::Unauthenticated);
    }

    /// Persist `user` and replace the session with it as one logical write.
    fn install(&self, user: UserRecord) {
        storage::save_json(STORAGE_KEY, &user);
        self.session.set(Session::Authenticated(user));
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
