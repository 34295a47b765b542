use std::path::PathBuf;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

use mikocli::client::{ApiClient, ApiError};
use mikocli::management::{Session, TokenStore};
use mikocli::routes::{self, Nav};
use mikocli::types::{AuthToken, SubsonicUser};

// Helper function to get a clean scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mikocli-session-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

// Helper function to build a client that cannot reach any server; a test
// only passes with it if no request was actually issued.
fn unreachable_client(base: PathBuf) -> ApiClient {
    ApiClient::new("http://127.0.0.1:9/api".to_string(), TokenStore::at(base))
}

fn test_user(username: &str) -> SubsonicUser {
    SubsonicUser {
        username: username.to_string(),
        email: None,
        admin_role: false,
        settings_role: true,
        download_role: true,
        stream_role: true,
        playlist_role: true,
        folder: Vec::new(),
    }
}

fn jwt_for(sub: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\"}");
    let payload = URL_SAFE_NO_PAD.encode(format!("{{\"sub\":\"{}\"}}", sub).as_bytes());
    format!("{}.{}.signature", header, payload)
}

#[tokio::test]
async fn test_fetch_profile_is_idempotent_when_loaded() {
    let base = scratch_dir("idempotent");
    let client = unreachable_client(base.clone());

    let mut session = Session::with_profile(
        TokenStore::at(base),
        Nav::new(routes::table()),
        test_user("admin"),
    );

    // With a profile loaded no request is issued; an issued request against
    // the unreachable client would surface as an error here.
    session.fetch_profile(&client).await.unwrap();
    session.fetch_profile(&client).await.unwrap();

    assert_eq!(session.user().unwrap().username, "admin");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_fetch_profile_without_token_is_a_noop() {
    let base = scratch_dir("no-token");
    let client = unreachable_client(base.clone());

    let mut session = Session::new(TokenStore::at(base), Nav::new(routes::table()));
    session.fetch_profile(&client).await.unwrap();

    assert!(session.user().is_none());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_fetch_profile_with_undecodable_token_is_a_noop() {
    let base = scratch_dir("bad-token");
    let store = TokenStore::at(base.clone());
    store
        .persist(&AuthToken {
            token: "not-a-jwt".to_string(),
        })
        .await
        .unwrap();

    let client = unreachable_client(base.clone());
    let mut session = Session::new(TokenStore::at(base.clone()), Nav::new(routes::table()));

    // No derivable identity: silently treated as not logged in, no request
    session.fetch_profile(&client).await.unwrap();
    assert!(session.user().is_none());

    // The token itself stays untouched
    assert!(TokenStore::at(base).load().await.is_ok());
}

#[tokio::test]
async fn test_logout_clears_token_and_navigates() {
    let base = scratch_dir("logout");
    let store = TokenStore::at(base.clone());
    store
        .persist(&AuthToken {
            token: jwt_for("admin"),
        })
        .await
        .unwrap();

    let mut session = Session::with_profile(
        TokenStore::at(base.clone()),
        Nav::new(routes::table()),
        test_user("admin"),
    );

    session.logout().await;

    assert!(session.user().is_none());
    assert_eq!(session.nav().location(), routes::LOGIN_PATH);
    assert!(TokenStore::at(base).load().await.is_err());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let base = scratch_dir("logout-twice");
    let mut session = Session::new(TokenStore::at(base), Nav::new(routes::table()));

    // Nothing stored, nobody logged in; still fine to call repeatedly
    session.logout().await;
    session.logout().await;

    assert!(session.user().is_none());
    assert_eq!(session.nav().location(), routes::LOGIN_PATH);
}

#[tokio::test]
async fn test_absorb_logs_out_on_unauthorized() {
    let base = scratch_dir("absorb");
    let store = TokenStore::at(base.clone());
    store
        .persist(&AuthToken {
            token: jwt_for("admin"),
        })
        .await
        .unwrap();

    let mut session = Session::with_profile(
        TokenStore::at(base.clone()),
        Nav::new(routes::table()),
        test_user("admin"),
    );

    let err = ApiError::Unauthorized {
        path: "/getAlbumList2".to_string(),
    };
    session.absorb(&err).await;

    assert!(session.user().is_none());
    assert_eq!(session.nav().location(), routes::LOGIN_PATH);
    assert!(TokenStore::at(base).load().await.is_err());
}

#[tokio::test]
async fn test_absorb_spares_allow_listed_paths() {
    let base = scratch_dir("absorb-exempt");
    let store = TokenStore::at(base.clone());
    store
        .persist(&AuthToken {
            token: jwt_for("admin"),
        })
        .await
        .unwrap();

    let mut session = Session::with_profile(
        TokenStore::at(base.clone()),
        Nav::new(routes::table()),
        test_user("admin"),
    );

    let err = ApiError::Unauthorized {
        path: "/getUser".to_string(),
    };
    session.absorb(&err).await;

    // Session unchanged, token still stored
    assert!(session.user().is_some());
    assert_ne!(session.nav().location(), routes::LOGIN_PATH);
    assert!(TokenStore::at(base).load().await.is_ok());
}

#[tokio::test]
async fn test_token_store_round_trip() {
    let base = scratch_dir("token-store");
    let store = TokenStore::at(base);

    let token = AuthToken {
        token: jwt_for("admin"),
    };
    store.persist(&token).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.token, token.token);

    store.clear().await.unwrap();
    assert!(store.load().await.is_err());

    // Clearing again stays fine
    store.clear().await.unwrap();
}
