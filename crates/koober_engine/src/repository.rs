use std::sync::Arc;

use koober_core::{NewAccount, Secret, UserSession};

use crate::{AuthRemoteApi, RepositoryError, UserSessionDataStore};

#[async_trait::async_trait]
pub trait UserSessionRepository: Send + Sync {
    async fn read_user_session(&self) -> Result<Option<UserSession>, RepositoryError>;

    async fn sign_up(&self, account: &NewAccount) -> Result<UserSession, RepositoryError>;

    async fn sign_in(&self, email: &str, password: &Secret)
        -> Result<UserSession, RepositoryError>;

    async fn sign_out(&self, session: UserSession) -> Result<UserSession, RepositoryError>;
}

/// Remote authentication backed by a local session store.
///
/// Sign up and sign in persist the session the remote returns; sign out only
/// deletes the local copy.
#[derive(Clone)]
pub struct KooberUserSessionRepository {
    remote_api: Arc<dyn AuthRemoteApi>,
    data_store: Arc<dyn UserSessionDataStore>,
}

impl KooberUserSessionRepository {
    pub fn new(
        remote_api: Arc<dyn AuthRemoteApi>,
        data_store: Arc<dyn UserSessionDataStore>,
    ) -> Self {
        Self {
            remote_api,
            data_store,
        }
    }
}

#[async_trait::async_trait]
impl UserSessionRepository for KooberUserSessionRepository {
    async fn read_user_session(&self) -> Result<Option<UserSession>, RepositoryError> {
        Ok(self.data_store.read_user_session().await?)
    }

    async fn sign_up(&self, account: &NewAccount) -> Result<UserSession, RepositoryError> {
        let session = self.remote_api.sign_up(account).await?;
        Ok(self.data_store.save(session).await?)
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &Secret,
    ) -> Result<UserSession, RepositoryError> {
        let session = self.remote_api.sign_in(email, password).await?;
        Ok(self.data_store.save(session).await?)
    }

    async fn sign_out(&self, session: UserSession) -> Result<UserSession, RepositoryError> {
        Ok(self.data_store.delete(session).await?)
    }
}
