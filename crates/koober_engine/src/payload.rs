//! JSON shapes shared by the cloud API and the session file.
use koober_core::{RemoteUserSession, UserProfile, UserSession};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfilePayload {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub avatar: String,
}

impl From<ProfilePayload> for UserProfile {
    fn from(payload: ProfilePayload) -> Self {
        UserProfile {
            name: payload.name,
            email: payload.email,
            mobile_number: payload.mobile_number,
            avatar: payload.avatar,
        }
    }
}

impl From<&UserProfile> for ProfilePayload {
    fn from(profile: &UserProfile) -> Self {
        ProfilePayload {
            name: profile.name.clone(),
            email: profile.email.clone(),
            mobile_number: profile.mobile_number.clone(),
            avatar: profile.avatar.clone(),
        }
    }
}

/// Body returned by `/login` and `/signup`.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionResponse {
    pub token: String,
    pub profile: ProfilePayload,
}

impl From<SessionResponse> for UserSession {
    fn from(response: SessionResponse) -> Self {
        UserSession::new(
            response.profile.into(),
            RemoteUserSession {
                token: response.token,
            },
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignUpRequest<'a> {
    pub full_name: &'a str,
    pub nickname: &'a str,
    pub email: &'a str,
    pub mobile_number: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersistedUserSession {
    pub profile: ProfilePayload,
    pub remote_session: PersistedRemoteSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PersistedRemoteSession {
    pub token: String,
}

impl From<&UserSession> for PersistedUserSession {
    fn from(session: &UserSession) -> Self {
        PersistedUserSession {
            profile: (&session.profile).into(),
            remote_session: PersistedRemoteSession {
                token: session.remote_session.token.clone(),
            },
        }
    }
}

impl From<PersistedUserSession> for UserSession {
    fn from(persisted: PersistedUserSession) -> Self {
        UserSession::new(
            persisted.profile.into(),
            RemoteUserSession {
                token: persisted.remote_session.token,
            },
        )
    }
}
