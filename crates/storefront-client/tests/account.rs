//! Session lifecycle: token handling across login and logout.

mod common;

use common::{storefront, wait_for, MockTransport};
use storefront_client::Credentials;

#[tokio::test]
async fn test_login_stores_token_for_subsequent_requests() {
    let transport = MockTransport::new();
    transport.respond(
        200,
        r#"{"status":"success","data":{"token":"tok-abc","user":{"id":"u-1","email":"ana@example.com","name":"Ana","role":"CUSTOMER"}}}"#,
    );
    transport.respond(200, r#"{"status":"success","data":{"id":"cart-1","items":[]}}"#);
    let app = storefront(transport.clone());

    let user = app
        .account
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.email, "ana@example.com");
    assert!(app.token_store().is_authenticated());

    app.cart.fetch().await.unwrap();
    let requests = transport.requests();
    // The login request itself goes out unauthenticated.
    assert!(!requests[0].headers.contains_key("Authorization"));
    assert_eq!(
        requests[1].headers.get("Authorization").map(String::as_str),
        Some("Bearer tok-abc")
    );

    let state = wait_for(app.store(), |s| s.auth.is_authenticated()).await;
    assert_eq!(state.auth.email.as_deref(), Some("ana@example.com"));
}

#[tokio::test]
async fn test_logout_clears_token_and_user_state() {
    let transport = MockTransport::new();
    transport.respond(
        200,
        r#"{"status":"success","data":{"token":"tok-abc","user":{"id":"u-1","email":"ana@example.com","role":"ADMIN"}}}"#,
    );
    let app = storefront(transport.clone());

    app.account
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();
    wait_for(app.store(), |s| s.auth.is_authenticated()).await;

    app.account.logout();
    assert!(!app.token_store().is_authenticated());
    let state = wait_for(app.store(), |s| !s.auth.is_authenticated()).await;
    assert!(state.cart.cart.is_empty());
    assert!(state.checkout.discount.is_none());
    // Logout is purely local: only the login request hit the wire.
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_expired_session_surfaces_as_unauthorized() {
    let transport = MockTransport::new();
    transport.respond(401, r#"{"status":"error","message":"Unauthenticated"}"#);
    let app = storefront(transport.clone());

    let err = app.orders.history(1, 10).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Unauthenticated");
}
