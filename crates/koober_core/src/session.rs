use std::fmt;

/// Password or other credential that must never show up in logs.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUserSession {
    pub token: String,
}

/// Authenticated identity produced by sign up or sign in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub profile: UserProfile,
    pub remote_session: RemoteUserSession,
}

impl UserSession {
    pub fn new(profile: UserProfile, remote_session: RemoteUserSession) -> Self {
        Self {
            profile,
            remote_session,
        }
    }
}

/// Details entered on the sign up screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub full_name: String,
    pub nickname: String,
    pub email: String,
    pub mobile_number: String,
    pub password: Secret,
}
