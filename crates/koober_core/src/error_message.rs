/// User-facing error with a title and a body.
///
/// Compared and ordered by value, so inserting the same message twice into
/// an error set keeps a single entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorMessage {
    pub title: String,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn sign_in_failed() -> Self {
        Self::new("Sign In Failed", "Could not sign in.\nPlease try again.")
    }

    pub fn sign_up_failed() -> Self {
        Self::new("Sign Up Failed", "Could not sign up.\nPlease try again.")
    }

    pub fn sign_out_failed() -> Self {
        Self::new("Sign Out Failed", "Could not sign out.\nPlease try again.")
    }
}
