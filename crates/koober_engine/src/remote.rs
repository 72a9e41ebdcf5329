use std::time::Duration;

use koober_core::{NewAccount, RemoteUserSession, Secret, UserProfile, UserSession};
use koober_logging::{koober_debug, koober_info};
use reqwest::StatusCode;
use url::Url;

use crate::payload::{SessionResponse, SignUpRequest};
use crate::{FailureKind, RemoteApiError};

#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl RemoteSettings {
    pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
    pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8080/").expect("default base url"),
            connect_timeout: Duration::from_millis(Self::DEFAULT_CONNECT_TIMEOUT_MS),
            request_timeout: Duration::from_millis(Self::DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

/// Remote authentication service.
#[async_trait::async_trait]
pub trait AuthRemoteApi: Send + Sync {
    async fn sign_up(&self, account: &NewAccount) -> Result<UserSession, RemoteApiError>;

    async fn sign_in(&self, email: &str, password: &Secret)
        -> Result<UserSession, RemoteApiError>;
}

/// JSON-over-HTTP client for the Koober cloud.
#[derive(Debug, Clone)]
pub struct KooberCloudAuthRemoteApi {
    settings: RemoteSettings,
    client: reqwest::Client,
}

impl KooberCloudAuthRemoteApi {
    pub fn new(settings: RemoteSettings) -> Result<Self, RemoteApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| RemoteApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteApiError> {
        self.settings
            .base_url
            .join(path)
            .map_err(|err| RemoteApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl AuthRemoteApi for KooberCloudAuthRemoteApi {
    async fn sign_up(&self, account: &NewAccount) -> Result<UserSession, RemoteApiError> {
        let url = self.endpoint("signup")?;
        koober_debug!("POST {url}");
        let body = SignUpRequest {
            full_name: &account.full_name,
            nickname: &account.nickname,
            email: &account.email,
            mobile_number: &account.mobile_number,
            password: account.password.expose(),
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_session(response).await
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &Secret,
    ) -> Result<UserSession, RemoteApiError> {
        let url = self.endpoint("login")?;
        koober_debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .basic_auth(email, Some(password.expose()))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_session(response).await
    }
}

async fn read_session(response: reqwest::Response) -> Result<UserSession, RemoteApiError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(RemoteApiError::new(
            FailureKind::InvalidCredentials,
            status.to_string(),
        ));
    }
    if !status.is_success() {
        return Err(RemoteApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    let payload: SessionResponse = response.json().await.map_err(map_reqwest_error)?;
    Ok(payload.into())
}

fn map_reqwest_error(err: reqwest::Error) -> RemoteApiError {
    if err.is_timeout() {
        return RemoteApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return RemoteApiError::new(FailureKind::InvalidResponse, err.to_string());
    }
    RemoteApiError::new(FailureKind::Network, err.to_string())
}

/// Offline stand-in that knows a single account.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeAuthRemoteApi;

impl FakeAuthRemoteApi {
    pub const EMAIL: &'static str = "johnny@gmail.com";
    pub const PASSWORD: &'static str = "password";
    pub const TOKEN: &'static str = "64652626";
    const AVATAR: &'static str = "https://www.gravatar.com/avatar/00000000000000000000000000000000";

    pub fn new() -> Self {
        Self
    }

    fn session(profile: UserProfile) -> UserSession {
        UserSession::new(
            profile,
            RemoteUserSession {
                token: Self::TOKEN.to_string(),
            },
        )
    }
}

#[async_trait::async_trait]
impl AuthRemoteApi for FakeAuthRemoteApi {
    async fn sign_up(&self, account: &NewAccount) -> Result<UserSession, RemoteApiError> {
        koober_info!("Fake sign up for {}", account.email);
        Ok(Self::session(UserProfile {
            name: account.full_name.clone(),
            email: account.email.clone(),
            mobile_number: account.mobile_number.clone(),
            avatar: Self::AVATAR.to_string(),
        }))
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &Secret,
    ) -> Result<UserSession, RemoteApiError> {
        if email != Self::EMAIL || password.expose() != Self::PASSWORD {
            return Err(RemoteApiError::new(
                FailureKind::InvalidCredentials,
                format!("unknown account {email}"),
            ));
        }
        Ok(Self::session(UserProfile {
            name: "Johnny Appleseed".to_string(),
            email: Self::EMAIL.to_string(),
            mobile_number: "510-736-8754".to_string(),
            avatar: Self::AVATAR.to_string(),
        }))
    }
}
