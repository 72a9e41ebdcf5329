//! Named presets for the sign in screen.
use std::collections::BTreeSet;

use crate::{ErrorMessage, SignInViewState};

/// Locks every input while the request is in flight.
pub fn indicate_signing_in(view_state: &mut SignInViewState) {
    view_state.email_input_enabled = false;
    view_state.password_input_enabled = false;
    view_state.sign_in_button_enabled = false;
    view_state.activity_indicator_animating = true;
}

pub fn reset_after_error_presentation(view_state: &mut SignInViewState) {
    view_state.email_input_enabled = true;
    view_state.password_input_enabled = true;
    view_state.sign_in_button_enabled = true;
    view_state.activity_indicator_animating = false;
}

pub fn add_sign_in_error(errors_to_present: &mut BTreeSet<ErrorMessage>) {
    errors_to_present.insert(ErrorMessage::sign_in_failed());
}
