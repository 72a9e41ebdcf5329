use crate::{NewAccount, Secret, UserSession};

/// Side effects requested by [`crate::update`]; executed outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ReadUserSession,
    SignIn { email: String, password: Secret },
    SignUp(NewAccount),
    SignOut(UserSession),
}
