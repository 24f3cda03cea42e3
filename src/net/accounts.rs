//! REST wrapper for the remote accounts service.
//!
//! SYSTEM CONTEXT
//! ==============
//! All network traffic in this shell goes through this module. In browser
//! (hydrate) builds the requests are real `gloo-net` calls against the fixed
//! `/api/accounts` base path; in server and native test builds the same
//! functions exist but resolve to a connect failure, since the service is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Requests resolve to `Result<UserRecord, AccountsError>`. The error values
//! are transient classification input for the `*_failure_message` helpers
//! below; callers consume them into human-readable strings immediately and
//! never store or display them raw. Nothing here panics and nothing retries.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use serde_json::Value;

/// Fixed base path of the accounts service, proxied by the hosting server.
pub const BASE_PATH: &str = "/api/accounts";

const SERVER_ERROR: &str = "Server error. Please try again later.";
const CONNECTIVITY_ERROR: &str =
    "Unable to connect to the server. Please check your internet connection.";
const LOGIN_FALLBACK: &str = "Failed to log in. Please check your credentials.";
const SIGNUP_FALLBACK: &str = "Failed to create an account. Please try again.";

/// Opaque user payload returned by the accounts service.
///
/// The shape is owned by the service and deliberately not validated here;
/// accessors are best-effort reads over whatever JSON came back, so schema
/// drift on the service side degrades display instead of breaking login.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Value);

impl UserRecord {
    /// Best-effort lookup of a top-level string field.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// Best-effort display name: `name`, falling back to `email`.
    pub fn display_name(&self) -> Option<&str> {
        self.field_str("name").or_else(|| self.field_str("email"))
    }
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// How a request to the accounts service failed.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountsError {
    /// The service answered with a non-success status, plus whatever JSON
    /// body it sent (`Value::Null` when the body was absent or not JSON).
    Status { status: u16, body: Value },
    /// The request never produced a response (offline, DNS, refused).
    Connect(String),
    /// A success response arrived but its body was not readable JSON.
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{BASE_PATH}{path}")
}

#[cfg(feature = "hydrate")]
async fn post_json(url: &str, payload: &Value) -> Result<UserRecord, AccountsError> {
    let response = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|err| AccountsError::Connect(err.to_string()))?
        .send()
        .await
        .map_err(|err| AccountsError::Connect(err.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        return Err(AccountsError::Status { status, body });
    }

    response
        .json::<UserRecord>()
        .await
        .map_err(|err| AccountsError::Decode(err.to_string()))
}

/// `POST /api/accounts/login/` with email + password credentials.
///
/// Success returns the service's user payload verbatim.
///
/// # Errors
///
/// Returns an [`AccountsError`] describing the failed response, connect
/// failure, or unreadable body. Never resolves on the server side.
pub async fn login(email: &str, password: &str) -> Result<UserRecord, AccountsError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json(&endpoint("/login/"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AccountsError::Connect("not available on server".to_owned()))
    }
}

/// `POST /api/accounts/signup/` creating an account and signing it in.
///
/// Success returns the new user's payload verbatim.
///
/// # Errors
///
/// Returns an [`AccountsError`] describing the failed response, connect
/// failure, or unreadable body. Never resolves on the server side.
pub async fn signup(name: &str, email: &str, password: &str) -> Result<UserRecord, AccountsError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        post_json(&endpoint("/signup/"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(AccountsError::Connect("not available on server".to_owned()))
    }
}

/// Best-effort `POST /api/accounts/logout/`; the response is ignored.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&endpoint("/logout/")).send().await;
    }
}

/// Human-readable message for a failed login attempt.
///
/// Follows the service's status conventions: 400 and 401 are credential
/// problems and prefer the service's own `detail` text, 5xx is a server
/// fault, connect failures are reported as connectivity. Anything else
/// falls back to a generic login failure; unreadable bodies surface the
/// raw decode message.
pub fn login_failure_message(err: &AccountsError) -> String {
    match err {
        AccountsError::Status { status: 400 | 401, body } => {
            detail_message(body).unwrap_or_else(|| "Invalid email or password".to_owned())
        }
        AccountsError::Status { status, .. } if *status >= 500 => SERVER_ERROR.to_owned(),
        AccountsError::Status { .. } => LOGIN_FALLBACK.to_owned(),
        AccountsError::Connect(_) => CONNECTIVITY_ERROR.to_owned(),
        AccountsError::Decode(raw) => raw.clone(),
    }
}

/// Human-readable message for a failed signup attempt.
///
/// 409 is a duplicate account. A 400 whose body is just `{"detail": ...}`
/// surfaces that text; any other object body renders one `field: messages`
/// line per entry, a stray `detail` key included, so the service's
/// validation output is never dropped. 5xx is a server fault, connect
/// failures are reported as connectivity, and everything else falls back
/// to a generic signup failure.
pub fn signup_failure_message(err: &AccountsError) -> String {
    match err {
        AccountsError::Status { status: 409, .. } => {
            "An account with this email already exists.".to_owned()
        }
        AccountsError::Status { status: 400, body } => detail_only_message(body)
            .or_else(|| field_errors_message(body))
            .unwrap_or_else(|| SIGNUP_FALLBACK.to_owned()),
        AccountsError::Status { status, .. } if *status >= 500 => SERVER_ERROR.to_owned(),
        AccountsError::Status { .. } => SIGNUP_FALLBACK.to_owned(),
        AccountsError::Connect(_) => CONNECTIVITY_ERROR.to_owned(),
        AccountsError::Decode(raw) => raw.clone(),
    }
}

/// The service's `{"detail": "..."}` error text, if present.
fn detail_message(body: &Value) -> Option<String> {
    body.get("detail")?.as_str().map(str::to_owned)
}

/// The service's `detail` text, when it is the body's only field.
///
/// A body that carries field errors alongside `detail` is not a plain
/// detail message; it goes through [`field_errors_message`] instead.
fn detail_only_message(body: &Value) -> Option<String> {
    let fields = body.as_object()?;
    if fields.len() != 1 {
        return None;
    }
    fields.get("detail")?.as_str().map(str::to_owned)
}

/// One `field: messages` line per entry of a per-field validation payload.
///
/// Field values may be arrays of messages (joined with spaces) or single
/// messages; non-string entries render as raw JSON. Returns `None` when the
/// body is not an object or has no entries.
fn field_errors_message(body: &Value) -> Option<String> {
    let fields = body.as_object()?;
    if fields.is_empty() {
        return None;
    }
    let lines: Vec<String> = fields
        .iter()
        .map(|(field, errors)| format!("{field}: {}", field_error_text(errors)))
        .collect();
    Some(lines.join("\n"))
}

fn field_error_text(errors: &Value) -> String {
    match errors {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(value_text).collect();
            parts.join(" ")
        }
        other => value_text(other),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
