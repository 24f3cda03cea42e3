use super::*;

fn status_error(status: u16, body: Value) -> AccountsError {
    AccountsError::Status { status, body }
}

// =============================================================================
// endpoint
// =============================================================================

#[test]
fn endpoint_joins_the_fixed_base_path() {
    assert_eq!(endpoint("/login/"), "/api/accounts/login/");
    assert_eq!(endpoint("/signup/"), "/api/accounts/signup/");
    assert_eq!(endpoint("/logout/"), "/api/accounts/logout/");
}

// =============================================================================
// UserRecord
// =============================================================================

#[test]
fn user_record_serializes_transparently() {
    let payload = serde_json::json!({ "id": 7, "email": "ada@example.com" });
    let record = UserRecord::from(payload.clone());
    let raw = serde_json::to_string(&record).unwrap();
    assert_eq!(raw, serde_json::to_string(&payload).unwrap());

    let reparsed: UserRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(reparsed, record);
}

#[test]
fn user_record_field_str_reads_top_level_strings() {
    let record = UserRecord::from(serde_json::json!({ "name": "Ada", "id": 7 }));
    assert_eq!(record.field_str("name"), Some("Ada"));
    assert_eq!(record.field_str("id"), None);
    assert_eq!(record.field_str("missing"), None);
}

#[test]
fn user_record_field_str_tolerates_non_object_payloads() {
    let record = UserRecord::from(serde_json::json!("just a string"));
    assert_eq!(record.field_str("name"), None);
}

#[test]
fn user_record_display_name_prefers_name_over_email() {
    let both = UserRecord::from(serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
    }));
    assert_eq!(both.display_name(), Some("Ada"));

    let email_only = UserRecord::from(serde_json::json!({ "email": "ada@example.com" }));
    assert_eq!(email_only.display_name(), Some("ada@example.com"));

    let neither = UserRecord::from(serde_json::json!({ "id": 7 }));
    assert_eq!(neither.display_name(), None);
}

// =============================================================================
// login_failure_message
// =============================================================================

#[test]
fn login_message_uses_service_detail_for_credential_statuses() {
    let err = status_error(401, serde_json::json!({ "detail": "Account locked" }));
    assert_eq!(login_failure_message(&err), "Account locked");

    let err = status_error(400, serde_json::json!({ "detail": "Missing password" }));
    assert_eq!(login_failure_message(&err), "Missing password");
}

#[test]
fn login_message_defaults_for_credential_statuses_without_detail() {
    let err = status_error(401, Value::Null);
    assert_eq!(login_failure_message(&err), "Invalid email or password");

    let err = status_error(400, serde_json::json!({ "code": "bad_request" }));
    assert_eq!(login_failure_message(&err), "Invalid email or password");
}

#[test]
fn login_message_reports_server_faults() {
    let err = status_error(500, Value::Null);
    assert_eq!(login_failure_message(&err), "Server error. Please try again later.");

    let err = status_error(503, serde_json::json!({ "detail": "down" }));
    assert_eq!(login_failure_message(&err), "Server error. Please try again later.");
}

#[test]
fn login_message_falls_back_for_unexpected_statuses() {
    let err = status_error(404, Value::Null);
    assert_eq!(
        login_failure_message(&err),
        "Failed to log in. Please check your credentials."
    );
}

#[test]
fn login_message_reports_connectivity_failures() {
    let err = AccountsError::Connect("NetworkError when attempting to fetch".to_owned());
    assert_eq!(
        login_failure_message(&err),
        "Unable to connect to the server. Please check your internet connection."
    );
}

#[test]
fn login_message_surfaces_raw_decode_failures() {
    let err = AccountsError::Decode("EOF while parsing a value".to_owned());
    assert_eq!(login_failure_message(&err), "EOF while parsing a value");
}

// =============================================================================
// signup_failure_message
// =============================================================================

#[test]
fn signup_message_reports_duplicate_accounts() {
    let err = status_error(409, serde_json::json!({ "detail": "conflict" }));
    assert_eq!(
        signup_failure_message(&err),
        "An account with this email already exists."
    );
}

#[test]
fn signup_message_prefers_detail_on_validation_status() {
    let err = status_error(400, serde_json::json!({ "detail": "Signups disabled" }));
    assert_eq!(signup_failure_message(&err), "Signups disabled");
}

#[test]
fn signup_message_keeps_field_errors_when_detail_rides_along() {
    let err = status_error(
        400,
        serde_json::json!({
            "detail": "Validation failed.",
            "email": ["A user with this email already exists."],
        }),
    );
    assert_eq!(
        signup_failure_message(&err),
        "detail: Validation failed.\n\
         email: A user with this email already exists."
    );
}

#[test]
fn signup_message_renders_field_errors_one_line_per_field() {
    let err = status_error(
        400,
        serde_json::json!({
            "email": ["Enter a valid email address.", "This field may not be blank."],
            "password": "This password is too short.",
        }),
    );
    assert_eq!(
        signup_failure_message(&err),
        "email: Enter a valid email address. This field may not be blank.\n\
         password: This password is too short."
    );
}

#[test]
fn signup_message_renders_non_string_field_errors_as_json() {
    let err = status_error(400, serde_json::json!({ "age": [18, "too young"] }));
    assert_eq!(signup_failure_message(&err), "age: 18 too young");
}

#[test]
fn signup_message_orders_field_errors_alphabetically() {
    let err = status_error(
        400,
        serde_json::json!({
            "password": "This password is too short.",
            "email": "Enter a valid email address.",
        }),
    );
    assert_eq!(
        signup_failure_message(&err),
        "email: Enter a valid email address.\n\
         password: This password is too short."
    );
}

#[test]
fn signup_message_falls_back_when_validation_body_is_unusable() {
    let err = status_error(400, serde_json::json!("malformed"));
    assert_eq!(
        signup_failure_message(&err),
        "Failed to create an account. Please try again."
    );

    let err = status_error(400, serde_json::json!({}));
    assert_eq!(
        signup_failure_message(&err),
        "Failed to create an account. Please try again."
    );
}

#[test]
fn signup_message_reports_server_faults() {
    let err = status_error(502, Value::Null);
    assert_eq!(signup_failure_message(&err), "Server error. Please try again later.");
}

#[test]
fn signup_message_falls_back_for_unexpected_statuses() {
    let err = status_error(418, Value::Null);
    assert_eq!(
        signup_failure_message(&err),
        "Failed to create an account. Please try again."
    );
}

#[test]
fn signup_message_reports_connectivity_failures() {
    let err = AccountsError::Connect("Failed to fetch".to_owned());
    assert_eq!(
        signup_failure_message(&err),
        "Unable to connect to the server. Please check your internet connection."
    );
}

#[test]
fn signup_message_surfaces_raw_decode_failures() {
    let err = AccountsError::Decode("invalid type: map, expected a string".to_owned());
    assert_eq!(
        signup_failure_message(&err),
        "invalid type: map, expected a string"
    );
}

// =============================================================================
// Non-browser request stubs
// =============================================================================

#[cfg(not(feature = "hydrate"))]
mod server_side {
    use super::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        // The stub futures resolve immediately; poll once with a no-op waker.
        let mut future = Box::pin(future);
        let waker = std::task::Waker::noop();
        let mut cx = std::task::Context::from_waker(waker);
        match future.as_mut().poll(&mut cx) {
            std::task::Poll::Ready(output) => output,
            std::task::Poll::Pending => panic!("stub future did not resolve immediately"),
        }
    }

    #[test]
    fn login_reports_connect_failure_outside_the_browser() {
        let result = block_on(login("ada@example.com", "hunter2"));
        assert_eq!(
            result,
            Err(AccountsError::Connect("not available on server".to_owned()))
        );
    }

    #[test]
    fn signup_reports_connect_failure_outside_the_browser() {
        let result = block_on(signup("Ada", "ada@example.com", "hunter2"));
        assert_eq!(
            result,
            Err(AccountsError::Connect("not available on server".to_owned()))
        );
    }

    #[test]
    fn logout_resolves_immediately_outside_the_browser() {
        block_on(logout());
    }
}
