//! Koober engine: session repository, remote API and the store that runs effects.
mod data_store;
mod effects;
mod payload;
mod remote;
mod repository;
mod store;
mod types;

pub use data_store::{FileUserSessionDataStore, UserSessionDataStore};
pub use effects::run_effect;
pub use remote::{AuthRemoteApi, FakeAuthRemoteApi, KooberCloudAuthRemoteApi, RemoteSettings};
pub use repository::{KooberUserSessionRepository, UserSessionRepository};
pub use store::{Store, Subscription};
pub use types::{DataStoreError, FailureKind, RemoteApiError, RepositoryError};
