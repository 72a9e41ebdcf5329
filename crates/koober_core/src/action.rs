use crate::{ErrorMessage, NewAccount, Secret, UserSession};

/// Every intent or event that can be dispatched into the state tree.
///
/// Reducers receive the whole action and match only the variants they own;
/// anything else leaves their state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Launch(LaunchAction),
    Session(SessionAction),
    Onboarding(OnboardingAction),
    SignIn(SignInAction),
    SignUp(SignUpAction),
    SignedIn(SignedInAction),
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    /// App started; the persisted session still has to be read.
    Started,
    /// Persisted session lookup finished.
    FinishedLaunching(Option<UserSession>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SignedIn(UserSession),
    SignedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    GoToSignIn,
    GoToSignUp,
    NavigatedBackToWelcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInAction {
    /// User tapped the sign in button.
    SignInRequested { email: String, password: Secret },
    SigningIn,
    SignInFailed,
    FinishedPresentingError(ErrorMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpAction {
    /// User tapped the sign up button.
    SignUpRequested(NewAccount),
    SigningUp,
    SignUpFailed,
    FinishedPresentingError(ErrorMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignedInAction {
    SignOutRequested,
    SigningOut,
    SignOutFailed,
    FinishedPresentingError(ErrorMessage),
}

impl From<LaunchAction> for Action {
    fn from(action: LaunchAction) -> Self {
        Action::Launch(action)
    }
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Action::Session(action)
    }
}

impl From<OnboardingAction> for Action {
    fn from(action: OnboardingAction) -> Self {
        Action::Onboarding(action)
    }
}

impl From<SignInAction> for Action {
    fn from(action: SignInAction) -> Self {
        Action::SignIn(action)
    }
}

impl From<SignUpAction> for Action {
    fn from(action: SignUpAction) -> Self {
        Action::SignUp(action)
    }
}

impl From<SignedInAction> for Action {
    fn from(action: SignedInAction) -> Self {
        Action::SignedIn(action)
    }
}
