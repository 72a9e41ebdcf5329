use crate::reducer::app_reducer;
use crate::{
    Action, AppState, Effect, LaunchAction, OnboardingState, SignInAction, SignUpAction,
    SignedInAction,
};

/// Pure update function: applies an action to state and returns any effects.
///
/// Request actions (sign in, sign up, sign out) are turned into the matching
/// in-progress action plus an effect, and only while the screen is able to
/// accept them. Everything else goes straight to the reducer.
pub fn update(state: AppState, action: Action) -> (AppState, Vec<Effect>) {
    match action {
        Action::Launch(LaunchAction::Started) => {
            if state == AppState::Launching {
                (state, vec![Effect::ReadUserSession])
            } else {
                (state, Vec::new())
            }
        }
        Action::SignIn(SignInAction::SignInRequested { email, password }) => {
            let accepting = matches!(
                state.onboarding(),
                Some(OnboardingState::SigningIn(sign_in))
                    if sign_in.view_state.sign_in_button_enabled
            );
            if !accepting {
                return (state, Vec::new());
            }
            let state = app_reducer(&Action::SignIn(SignInAction::SigningIn), Some(state));
            (state, vec![Effect::SignIn { email, password }])
        }
        Action::SignUp(SignUpAction::SignUpRequested(account)) => {
            let accepting = matches!(
                state.onboarding(),
                Some(OnboardingState::SigningUp(sign_up))
                    if sign_up.view_state.sign_up_button_enabled
            );
            if !accepting {
                return (state, Vec::new());
            }
            let state = app_reducer(&Action::SignUp(SignUpAction::SigningUp), Some(state));
            (state, vec![Effect::SignUp(account)])
        }
        Action::SignedIn(SignedInAction::SignOutRequested) => {
            let session = state
                .signed_in()
                .filter(|signed_in| !signed_in.signing_out)
                .map(|signed_in| signed_in.user_session.clone());
            let Some(session) = session else {
                return (state, Vec::new());
            };
            let state = app_reducer(&Action::SignedIn(SignedInAction::SigningOut), Some(state));
            (state, vec![Effect::SignOut(session)])
        }
        action => (app_reducer(&action, Some(state)), Vec::new()),
    }
}
