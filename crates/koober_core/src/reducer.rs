//! Hierarchical reducers.
//!
//! Every reducer takes the dispatched action and the previous state (absent
//! means the default state) and returns the next state. Outer reducers apply
//! their own transitions first, then hand the same action to the reducer of
//! whichever sub-state is active. Actions a reducer does not own leave its
//! state unchanged.
use crate::{
    sign_in_logic, sign_up_logic, Action, AppRunningState, AppState, ErrorMessage,
    LaunchAction, OnboardingAction, OnboardingState, SessionAction, SignInAction,
    SignInViewControllerState, SignUpAction, SignUpViewControllerState, SignedInAction,
    SignedInState,
};

pub fn app_reducer(action: &Action, state: Option<AppState>) -> AppState {
    let state = match (action, state.unwrap_or_default()) {
        (Action::Launch(LaunchAction::FinishedLaunching(session)), AppState::Launching) => {
            match session {
                Some(session) => AppState::Running(AppRunningState::SignedIn(
                    SignedInState::new(session.clone()),
                )),
                None => AppState::Running(AppRunningState::default()),
            }
        }
        (_, state) => state,
    };

    match state {
        AppState::Launching => AppState::Launching,
        AppState::Running(running) => {
            AppState::Running(app_running_reducer(action, Some(running)))
        }
    }
}

pub fn app_running_reducer(action: &Action, state: Option<AppRunningState>) -> AppRunningState {
    let state = match action {
        Action::Session(SessionAction::SignedIn(session)) => {
            AppRunningState::SignedIn(SignedInState::new(session.clone()))
        }
        Action::Session(SessionAction::SignedOut) => {
            AppRunningState::Onboarding(OnboardingState::Welcoming)
        }
        _ => state.unwrap_or_default(),
    };

    match state {
        AppRunningState::Onboarding(onboarding) => {
            AppRunningState::Onboarding(onboarding_reducer(action, Some(onboarding)))
        }
        AppRunningState::SignedIn(signed_in) => {
            AppRunningState::SignedIn(signed_in_reducer(action, signed_in))
        }
    }
}

pub fn onboarding_reducer(action: &Action, state: Option<OnboardingState>) -> OnboardingState {
    let state = match action {
        Action::Onboarding(OnboardingAction::GoToSignUp) => {
            OnboardingState::SigningUp(SignUpViewControllerState::default())
        }
        Action::Onboarding(OnboardingAction::GoToSignIn) => {
            OnboardingState::SigningIn(SignInViewControllerState::default())
        }
        Action::Onboarding(OnboardingAction::NavigatedBackToWelcome) => {
            OnboardingState::Welcoming
        }
        _ => state.unwrap_or_default(),
    };

    match state {
        OnboardingState::Welcoming => OnboardingState::Welcoming,
        OnboardingState::SigningUp(sign_up) => {
            OnboardingState::SigningUp(sign_up_reducer(action, Some(sign_up)))
        }
        OnboardingState::SigningIn(sign_in) => {
            OnboardingState::SigningIn(sign_in_reducer(action, Some(sign_in)))
        }
    }
}

pub fn sign_in_reducer(
    action: &Action,
    state: Option<SignInViewControllerState>,
) -> SignInViewControllerState {
    let mut state = state.unwrap_or_default();
    match action {
        Action::SignIn(SignInAction::SigningIn) => {
            sign_in_logic::indicate_signing_in(&mut state.view_state);
        }
        Action::SignIn(SignInAction::SignInFailed) => {
            sign_in_logic::add_sign_in_error(&mut state.errors_to_present);
        }
        Action::SignIn(SignInAction::FinishedPresentingError(message)) => {
            state.errors_to_present.remove(message);
            sign_in_logic::reset_after_error_presentation(&mut state.view_state);
        }
        _ => {}
    }
    state
}

pub fn sign_up_reducer(
    action: &Action,
    state: Option<SignUpViewControllerState>,
) -> SignUpViewControllerState {
    let mut state = state.unwrap_or_default();
    match action {
        Action::SignUp(SignUpAction::SigningUp) => {
            sign_up_logic::indicate_signing_up(&mut state.view_state);
        }
        Action::SignUp(SignUpAction::SignUpFailed) => {
            sign_up_logic::add_sign_up_error(&mut state.errors_to_present);
        }
        Action::SignUp(SignUpAction::FinishedPresentingError(message)) => {
            state.errors_to_present.remove(message);
            sign_up_logic::reset_after_error_presentation(&mut state.view_state);
        }
        _ => {}
    }
    state
}

/// Signed-in state has no default, so the previous state is required.
pub fn signed_in_reducer(action: &Action, mut state: SignedInState) -> SignedInState {
    match action {
        Action::SignedIn(SignedInAction::SigningOut) => {
            state.signing_out = true;
        }
        Action::SignedIn(SignedInAction::SignOutFailed) => {
            state.signing_out = false;
            state
                .errors_to_present
                .insert(ErrorMessage::sign_out_failed());
        }
        Action::SignedIn(SignedInAction::FinishedPresentingError(message)) => {
            state.errors_to_present.remove(message);
        }
        _ => {}
    }
    state
}
