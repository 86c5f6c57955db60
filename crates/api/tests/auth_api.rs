//! HTTP-level integration tests for the auth lifecycle endpoints.
//!
//! Covers login, refresh rotation, logout fanout, uniform failure signals,
//! and input validation through the full middleware stack.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use sqlx::PgPool;
use warden_api::auth::password::hash_password;
use warden_db::models::user::CreateUser;
use warden_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const TEST_PASSWORD: &str = "test_password_123!";

/// Create a user directly in the database.
async fn create_test_user(pool: &PgPool, username: &str) {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            full_name: "Test User".to_string(),
            password_hash: hashed,
        },
    )
    .await
    .expect("user creation should succeed");
}

/// Log in via the API and return the token pair JSON.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns a camelCase token pair.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_pair(pool: PgPool) {
    create_test_user(&pool, "loginuser").await;
    let app = build_test_app(pool);

    let json = login_user(app, "loginuser", TEST_PASSWORD).await;

    assert!(json["accessToken"].is_string(), "response must contain accessToken");
    assert!(json["refreshToken"].is_string(), "response must contain refreshToken");
}

/// Wrong password and unknown user produce byte-identical failures.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_failures_are_uniform(pool: PgPool) {
    create_test_user(&pool, "realuser").await;

    let wrong_pw = post_json(
        build_test_app(pool.clone()),
        "/auth/login",
        serde_json::json!({ "username": "realuser", "password": "incorrect" }),
    )
    .await;
    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw_body = body_json(wrong_pw).await;

    let unknown = post_json(
        build_test_app(pool),
        "/auth/login",
        serde_json::json!({ "username": "ghost", "password": "incorrect" }),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown_body = body_json(unknown).await;

    assert_eq!(
        wrong_pw_body, unknown_body,
        "failure responses must not reveal which factor was wrong"
    );
    assert_eq!(wrong_pw_body["error"], "Invalid username or password");
}

/// Missing or empty credential fields fail validation with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_rejects_missing_fields(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/auth/login",
        serde_json::json!({ "username": "someone" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        build_test_app(pool),
        "/auth/login",
        serde_json::json!({ "username": "", "password": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Two logins by the same user coexist: the first session stays usable.
#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_logins_open_independent_chains(pool: PgPool) {
    create_test_user(&pool, "twodevices").await;

    let first = login_user(build_test_app(pool.clone()), "twodevices", TEST_PASSWORD).await;
    let second = login_user(build_test_app(pool.clone()), "twodevices", TEST_PASSWORD).await;
    let r1 = first["refreshToken"].as_str().unwrap();
    let r2 = second["refreshToken"].as_str().unwrap();
    assert_ne!(r1, r2, "each login must issue a distinct secret");

    // The earlier session still renews.
    let response = post_json(
        build_test_app(pool),
        "/auth/refresh",
        serde_json::json!({ "refreshToken": r1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

/// Refresh returns a new pair and permanently retires the presented token.
#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_presented_token(pool: PgPool) {
    create_test_user(&pool, "refresher").await;
    let login = login_user(build_test_app(pool.clone()), "refresher", TEST_PASSWORD).await;
    let r1 = login["refreshToken"].as_str().unwrap().to_string();

    let response = post_json(
        build_test_app(pool.clone()),
        "/auth/refresh",
        serde_json::json!({ "refreshToken": r1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["accessToken"].is_string());
    let r2 = json["refreshToken"].as_str().unwrap();
    assert_ne!(r2, r1, "refresh token must rotate on use");

    // Replaying the consumed token fails like any invalid token.
    let replay = post_json(
        build_test_app(pool),
        "/auth/refresh",
        serde_json::json!({ "refreshToken": r1 }),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

/// Never-issued tokens fail with the same uniform signal.
#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_with_unknown_token_unauthorized(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/auth/refresh",
        serde_json::json!({ "refreshToken": "not-a-real-token" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired refresh token");
}

/// A missing refreshToken field is a validation error, not an auth error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rejects_missing_field(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/auth/refresh", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout succeeds on live, already-revoked, and never-issued tokens alike.
#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_is_idempotent(pool: PgPool) {
    create_test_user(&pool, "logoutuser").await;
    let login = login_user(build_test_app(pool.clone()), "logoutuser", TEST_PASSWORD).await;
    let r1 = login["refreshToken"].as_str().unwrap().to_string();

    let first = post_json(
        build_test_app(pool.clone()),
        "/auth/logout",
        serde_json::json!({ "refreshToken": r1 }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["message"], "Logged out");

    let again = post_json(
        build_test_app(pool.clone()),
        "/auth/logout",
        serde_json::json!({ "refreshToken": r1 }),
    )
    .await;
    assert_eq!(again.status(), StatusCode::OK, "repeat logout must still succeed");

    let never_issued = post_json(
        build_test_app(pool),
        "/auth/logout",
        serde_json::json!({ "refreshToken": "never-issued" }),
    )
    .await;
    assert_eq!(never_issued.status(), StatusCode::OK, "unknown tokens must not error");
}

/// Logout with one device's token ends every session the user has.
#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_every_device(pool: PgPool) {
    create_test_user(&pool, "multidevice").await;

    let d1 = login_user(build_test_app(pool.clone()), "multidevice", TEST_PASSWORD).await;
    let d2 = login_user(build_test_app(pool.clone()), "multidevice", TEST_PASSWORD).await;
    let r1 = d1["refreshToken"].as_str().unwrap().to_string();
    let r2 = d2["refreshToken"].as_str().unwrap().to_string();

    let response = post_json(
        build_test_app(pool.clone()),
        "/auth/logout",
        serde_json::json!({ "refreshToken": r1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The other device's token is gone too.
    let replay = post_json(
        build_test_app(pool),
        "/auth/refresh",
        serde_json::json!({ "refreshToken": r2 }),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

/// An expired (but unrevoked) token still identifies its owner at logout
/// and ends the user's other sessions.
#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_with_expired_token_still_fans_out(pool: PgPool) {
    create_test_user(&pool, "stalephone").await;

    let old = login_user(build_test_app(pool.clone()), "stalephone", TEST_PASSWORD).await;
    let fresh = login_user(build_test_app(pool.clone()), "stalephone", TEST_PASSWORD).await;
    let r_old = old["refreshToken"].as_str().unwrap().to_string();
    let r_fresh = fresh["refreshToken"].as_str().unwrap().to_string();

    // Age the first session past its expiry without revoking it.
    sqlx::query(
        "UPDATE refresh_sessions
         SET created_at = NOW() - INTERVAL '8 days',
             expires_at = NOW() - INTERVAL '1 day'
         WHERE token_hash = $1",
    )
    .bind(warden_api::auth::refresh::digest(&r_old))
    .execute(&pool)
    .await
    .expect("backdating should succeed");

    // Renewing with the expired token fails...
    let renew = post_json(
        build_test_app(pool.clone()),
        "/auth/refresh",
        serde_json::json!({ "refreshToken": r_old }),
    )
    .await;
    assert_eq!(renew.status(), StatusCode::UNAUTHORIZED);

    // ...but logging out with it still succeeds and revokes everything.
    let response = post_json(
        build_test_app(pool.clone()),
        "/auth/logout",
        serde_json::json!({ "refreshToken": r_old }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let replay = post_json(
        build_test_app(pool),
        "/auth/refresh",
        serde_json::json!({ "refreshToken": r_fresh }),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED, "fanout must reach live sessions");
}
