use koober_core::{
    Action, Effect, LaunchAction, SessionAction, SignInAction, SignUpAction, SignedInAction,
};
use koober_logging::{koober_info, koober_warn};

use crate::UserSessionRepository;

/// Runs one effect against the repository and returns the action that
/// reports its outcome. Failures become the screen's fixed error action.
pub async fn run_effect(repository: &dyn UserSessionRepository, effect: Effect) -> Action {
    match effect {
        Effect::ReadUserSession => match repository.read_user_session().await {
            Ok(session) => {
                koober_info!("Launching with persisted session: {}", session.is_some());
                LaunchAction::FinishedLaunching(session).into()
            }
            Err(err) => {
                koober_warn!("Reading persisted session failed: {}", err);
                LaunchAction::FinishedLaunching(None).into()
            }
        },
        Effect::SignIn { email, password } => match repository.sign_in(&email, &password).await {
            Ok(session) => {
                koober_info!("Signed in as {}", session.profile.email);
                SessionAction::SignedIn(session).into()
            }
            Err(err) => {
                koober_warn!("Sign in failed for {}: {}", email, err);
                SignInAction::SignInFailed.into()
            }
        },
        Effect::SignUp(account) => match repository.sign_up(&account).await {
            Ok(session) => {
                koober_info!("Signed up as {}", session.profile.email);
                SessionAction::SignedIn(session).into()
            }
            Err(err) => {
                koober_warn!("Sign up failed for {}: {}", account.email, err);
                SignUpAction::SignUpFailed.into()
            }
        },
        Effect::SignOut(session) => match repository.sign_out(session).await {
            Ok(session) => {
                koober_info!("Signed out {}", session.profile.email);
                SessionAction::SignedOut.into()
            }
            Err(err) => {
                koober_warn!("Sign out failed: {}", err);
                SignedInAction::SignOutFailed.into()
            }
        },
    }
}
