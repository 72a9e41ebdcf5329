use std::collections::BTreeSet;

use crate::view_model::AppViewModel;
use crate::{ErrorMessage, UserSession};

/// Root of the state tree owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Launching,
    Running(AppRunningState),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn onboarding(&self) -> Option<&OnboardingState> {
        match self {
            AppState::Running(AppRunningState::Onboarding(onboarding)) => Some(onboarding),
            _ => None,
        }
    }

    pub fn signed_in(&self) -> Option<&SignedInState> {
        match self {
            AppState::Running(AppRunningState::SignedIn(signed_in)) => Some(signed_in),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRunningState {
    Onboarding(OnboardingState),
    SignedIn(SignedInState),
}

impl Default for AppRunningState {
    fn default() -> Self {
        AppRunningState::Onboarding(OnboardingState::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnboardingState {
    #[default]
    Welcoming,
    SigningUp(SignUpViewControllerState),
    SigningIn(SignInViewControllerState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInViewState {
    pub email_input_enabled: bool,
    pub password_input_enabled: bool,
    pub sign_in_button_enabled: bool,
    pub activity_indicator_animating: bool,
}

impl Default for SignInViewState {
    fn default() -> Self {
        Self {
            email_input_enabled: true,
            password_input_enabled: true,
            sign_in_button_enabled: true,
            activity_indicator_animating: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignInViewControllerState {
    pub view_state: SignInViewState,
    pub errors_to_present: BTreeSet<ErrorMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpViewState {
    pub full_name_input_enabled: bool,
    pub nickname_input_enabled: bool,
    pub email_input_enabled: bool,
    pub mobile_number_input_enabled: bool,
    pub password_input_enabled: bool,
    pub sign_up_button_enabled: bool,
    pub activity_indicator_animating: bool,
}

impl Default for SignUpViewState {
    fn default() -> Self {
        Self {
            full_name_input_enabled: true,
            nickname_input_enabled: true,
            email_input_enabled: true,
            mobile_number_input_enabled: true,
            password_input_enabled: true,
            sign_up_button_enabled: true,
            activity_indicator_animating: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignUpViewControllerState {
    pub view_state: SignUpViewState,
    pub errors_to_present: BTreeSet<ErrorMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInState {
    pub user_session: UserSession,
    pub signing_out: bool,
    pub errors_to_present: BTreeSet<ErrorMessage>,
}

impl SignedInState {
    pub fn new(user_session: UserSession) -> Self {
        Self {
            user_session,
            signing_out: false,
            errors_to_present: BTreeSet::new(),
        }
    }
}
