//! Named presets for the sign up screen.
use std::collections::BTreeSet;

use crate::{ErrorMessage, SignUpViewState};

pub fn indicate_signing_up(view_state: &mut SignUpViewState) {
    set_inputs_enabled(view_state, false);
    view_state.activity_indicator_animating = true;
}

pub fn reset_after_error_presentation(view_state: &mut SignUpViewState) {
    set_inputs_enabled(view_state, true);
    view_state.activity_indicator_animating = false;
}

pub fn add_sign_up_error(errors_to_present: &mut BTreeSet<ErrorMessage>) {
    errors_to_present.insert(ErrorMessage::sign_up_failed());
}

fn set_inputs_enabled(view_state: &mut SignUpViewState, enabled: bool) {
    view_state.full_name_input_enabled = enabled;
    view_state.nickname_input_enabled = enabled;
    view_state.email_input_enabled = enabled;
    view_state.mobile_number_input_enabled = enabled;
    view_state.password_input_enabled = enabled;
    view_state.sign_up_button_enabled = enabled;
}
