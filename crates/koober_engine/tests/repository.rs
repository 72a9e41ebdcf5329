mod common;

use std::sync::Arc;

use common::{init_logging, InMemoryDataStore};
use koober_core::{NewAccount, Secret};
use koober_engine::{
    DataStoreError, FailureKind, FakeAuthRemoteApi, FileUserSessionDataStore,
    KooberUserSessionRepository, RepositoryError, UserSessionRepository,
};
use tempfile::TempDir;

fn repository(store: Arc<InMemoryDataStore>) -> KooberUserSessionRepository {
    KooberUserSessionRepository::new(Arc::new(FakeAuthRemoteApi::new()), store)
}

#[tokio::test]
async fn sign_in_persists_remote_session() {
    init_logging();
    let store = Arc::new(InMemoryDataStore::default());
    let repo = repository(store.clone());

    let session = repo
        .sign_in(FakeAuthRemoteApi::EMAIL, &Secret::new(FakeAuthRemoteApi::PASSWORD))
        .await
        .unwrap();

    assert_eq!(store.current(), Some(session.clone()));
    assert_eq!(repo.read_user_session().await.unwrap(), Some(session));
}

#[tokio::test]
async fn sign_up_persists_session_for_new_account() {
    init_logging();
    let store = Arc::new(InMemoryDataStore::default());
    let repo = repository(store.clone());
    let account = NewAccount {
        full_name: "Jane Doe".to_string(),
        nickname: "jane".to_string(),
        email: "jane@example.com".to_string(),
        mobile_number: "555-0100".to_string(),
        password: Secret::new("s3cret"),
    };

    let session = repo.sign_up(&account).await.unwrap();

    assert_eq!(session.profile.name, "Jane Doe");
    assert_eq!(session.profile.email, "jane@example.com");
    assert_eq!(store.current(), Some(session));
}

#[tokio::test]
async fn sign_out_deletes_local_session() {
    init_logging();
    let store = Arc::new(InMemoryDataStore::default());
    let repo = repository(store.clone());
    let session = repo
        .sign_in(FakeAuthRemoteApi::EMAIL, &Secret::new(FakeAuthRemoteApi::PASSWORD))
        .await
        .unwrap();

    let signed_out = repo.sign_out(session.clone()).await.unwrap();

    assert_eq!(signed_out, session);
    assert_eq!(store.current(), None);
}

#[tokio::test]
async fn remote_failure_propagates_and_leaves_store_untouched() {
    init_logging();
    let store = Arc::new(InMemoryDataStore::default());
    let repo = repository(store.clone());

    let err = repo
        .sign_in("nobody@example.com", &Secret::new("nope"))
        .await
        .unwrap_err();

    match err {
        RepositoryError::Remote(remote) => assert_eq!(remote.kind, FailureKind::InvalidCredentials),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(store.current(), None);
}

#[tokio::test]
async fn store_failure_propagates_unchanged() {
    init_logging();
    let repo = repository(Arc::new(InMemoryDataStore::failing()));

    let err = repo
        .sign_in(FakeAuthRemoteApi::EMAIL, &Secret::new(FakeAuthRemoteApi::PASSWORD))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::DataStore(DataStoreError::Io(_))));
    assert_eq!(err.to_string(), "io error: read-only store");
}

#[tokio::test]
async fn file_backed_repository_survives_restart() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let open = || {
        KooberUserSessionRepository::new(
            Arc::new(FakeAuthRemoteApi::new()),
            Arc::new(FileUserSessionDataStore::new(temp.path().to_path_buf())),
        )
    };

    let session = open()
        .sign_in(FakeAuthRemoteApi::EMAIL, &Secret::new(FakeAuthRemoteApi::PASSWORD))
        .await
        .unwrap();

    assert_eq!(open().read_user_session().await.unwrap(), Some(session));
}
