//! Koober core: pure state tree, reducers and view-model helpers.
mod action;
mod containment;
mod effect;
mod error_message;
pub mod reducer;
mod session;
pub mod sign_in_logic;
pub mod sign_up_logic;
mod state;
mod update;
mod view_model;

pub use action::{
    Action, LaunchAction, OnboardingAction, SessionAction, SignInAction, SignUpAction,
    SignedInAction,
};
pub use containment::{LifecycleEvent, ScreenContainer};
pub use effect::Effect;
pub use error_message::ErrorMessage;
pub use reducer::{
    app_reducer, app_running_reducer, onboarding_reducer, sign_in_reducer, sign_up_reducer,
    signed_in_reducer,
};
pub use session::{NewAccount, RemoteUserSession, Secret, UserProfile, UserSession};
pub use state::{
    AppRunningState, AppState, OnboardingState, SignInViewControllerState, SignInViewState,
    SignUpViewControllerState, SignUpViewState, SignedInState,
};
pub use update::update;
pub use view_model::{AppViewModel, ScreenId, ScreenView};
