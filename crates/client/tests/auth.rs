//! Register/login exchanges against the in-process mock service.

mod mock;

use serde_json::json;

use common::prelude::Frame;
use facevault_client::api::register::RegisterFailureKind;
use facevault_client::{ApiClient, AuthError, FaceAuthClient, LoginOutcome, RegisterOutcome};

fn test_frame() -> Frame {
    Frame::new(4, 4, vec![0x89, 0x50, 0x4e, 0x47])
}

async fn auth_client() -> (FaceAuthClient, mock::MockVault) {
    let (url, state) = mock::spawn().await;
    let client = ApiClient::new(&url).expect("client");
    (FaceAuthClient::new(client), state)
}

#[tokio::test]
async fn test_register_success_yields_identity() {
    let (auth, _state) = auth_client().await;

    let outcome = auth.register("alice", &test_frame()).await.unwrap();
    match outcome {
        RegisterOutcome::Registered(identity) => assert_eq!(identity.as_str(), "alice"),
        other => panic!("expected Registered, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_face_exists_suggests_login() {
    let (auth, state) = auth_client().await;
    state.set_register_response(json!({
        "success": false,
        "type": "face_exists",
        "message": "This face is already registered"
    }));

    let outcome = auth.register("alice", &test_frame()).await.unwrap();
    match outcome {
        RegisterOutcome::Refused { kind, message } => {
            assert_eq!(kind, RegisterFailureKind::FaceExists);
            assert_eq!(message, "This face is already registered");
        }
        other => panic!("expected Refused, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_unknown_kind_is_absorbed() {
    let (auth, state) = auth_client().await;
    state.set_register_response(json!({
        "success": false,
        "type": "quota_exceeded",
        "message": "nope"
    }));

    let outcome = auth.register("alice", &test_frame()).await.unwrap();
    match outcome {
        RegisterOutcome::Refused { kind, .. } => assert_eq!(kind, RegisterFailureKind::Unknown),
        other => panic!("expected Refused, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_empty_name_is_local_failure() {
    let (auth, state) = auth_client().await;

    let err = auth.register("   ", &test_frame()).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidName(_)));
    assert!(state.hits().is_empty());
}

#[tokio::test]
async fn test_empty_frame_is_local_failure() {
    let (auth, state) = auth_client().await;
    let empty = Frame::new(0, 0, Vec::new());

    let err = auth.register("alice", &empty).await.unwrap_err();
    assert!(matches!(err, AuthError::EmptyFrame));

    let err = auth.login(&empty).await.unwrap_err();
    assert!(matches!(err, AuthError::EmptyFrame));

    assert!(state.hits().is_empty(), "nothing may reach the server");
}

#[tokio::test]
async fn test_login_success_yields_identity() {
    let (auth, state) = auth_client().await;
    state.set_login_response(json!({ "success": true, "username": "alice" }));

    let outcome = auth.login(&test_frame()).await.unwrap();
    match outcome {
        LoginOutcome::Authenticated(identity) => assert_eq!(identity.as_str(), "alice"),
        other => panic!("expected Authenticated, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_below_threshold_shows_server_detail() {
    let (auth, _state) = auth_client().await;

    // Mock default: success=false with the server's own wording.
    let outcome = auth.login(&test_frame()).await.unwrap();
    match outcome {
        LoginOutcome::Denied { detail } => assert_eq!(detail, "Face not recognized."),
        other => panic!("expected Denied, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_success_without_username_is_malformed() {
    let (auth, state) = auth_client().await;
    state.set_login_response(json!({ "success": true }));

    let err = auth.login(&test_frame()).await.unwrap_err();
    assert!(matches!(err, AuthError::MalformedResponse));
}
