use crate::{
    AppRunningState, AppState, ErrorMessage, OnboardingState, SignInViewState, SignUpViewState,
};

/// Which screen should currently be on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScreenId {
    /// Root container for the whole app.
    Main,
    /// Container for the welcome, sign in and sign up screens.
    Onboarding,
    Launch,
    Welcome,
    SignIn,
    SignUp,
    SignedIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Launch,
    Welcome,
    SignIn(SignInViewState),
    SignUp(SignUpViewState),
    SignedIn { name: String, signing_out: bool },
}

impl ScreenView {
    /// Container screen this screen is presented in.
    pub fn container(&self) -> ScreenId {
        match self {
            ScreenView::Welcome | ScreenView::SignIn(_) | ScreenView::SignUp(_) => {
                ScreenId::Onboarding
            }
            ScreenView::Launch | ScreenView::SignedIn { .. } => ScreenId::Main,
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            ScreenView::Launch => ScreenId::Launch,
            ScreenView::Welcome => ScreenId::Welcome,
            ScreenView::SignIn(_) => ScreenId::SignIn,
            ScreenView::SignUp(_) => ScreenId::SignUp,
            ScreenView::SignedIn { .. } => ScreenId::SignedIn,
        }
    }
}

/// Flattened snapshot of the state tree for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: ScreenView,
    /// Pending errors in presentation order.
    pub errors_to_present: Vec<ErrorMessage>,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let (screen, errors) = match state {
            AppState::Launching => (ScreenView::Launch, None),
            AppState::Running(AppRunningState::Onboarding(onboarding)) => match onboarding {
                OnboardingState::Welcoming => (ScreenView::Welcome, None),
                OnboardingState::SigningIn(sign_in) => (
                    ScreenView::SignIn(sign_in.view_state),
                    Some(&sign_in.errors_to_present),
                ),
                OnboardingState::SigningUp(sign_up) => (
                    ScreenView::SignUp(sign_up.view_state),
                    Some(&sign_up.errors_to_present),
                ),
            },
            AppState::Running(AppRunningState::SignedIn(signed_in)) => (
                ScreenView::SignedIn {
                    name: signed_in.user_session.profile.name.clone(),
                    signing_out: signed_in.signing_out,
                },
                Some(&signed_in.errors_to_present),
            ),
        };

        Self {
            screen,
            errors_to_present: errors
                .map(|errors| errors.iter().cloned().collect())
                .unwrap_or_default(),
        }
    }
}
