use koober_core::{
    Action, AppViewModel, NewAccount, OnboardingAction, ScreenView, Secret, SignInAction,
    SignUpAction, SignedInAction,
};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  goto signin | goto signup
  back
  signin <email> <password>
  signup <full name>;<nickname>;<email>;<mobile>;<password>
  dismiss
  signout
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    /// Acknowledge the first pending error on the current screen.
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "goto" => match rest {
            "signin" => Ok(Command::Dispatch(OnboardingAction::GoToSignIn.into())),
            "signup" => Ok(Command::Dispatch(OnboardingAction::GoToSignUp.into())),
            _ => Err(CommandError::Usage("goto signin | goto signup")),
        },
        "back" => Ok(Command::Dispatch(
            OnboardingAction::NavigatedBackToWelcome.into(),
        )),
        "signin" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(email), Some(password), None) => Ok(Command::Dispatch(
                    SignInAction::SignInRequested {
                        email: email.to_string(),
                        password: Secret::new(password),
                    }
                    .into(),
                )),
                _ => Err(CommandError::Usage("signin <email> <password>")),
            }
        }
        "signup" => parse_account(rest)
            .map(|account| Command::Dispatch(SignUpAction::SignUpRequested(account).into()))
            .ok_or(CommandError::Usage(
                "signup <full name>;<nickname>;<email>;<mobile>;<password>",
            )),
        "signout" => Ok(Command::Dispatch(SignedInAction::SignOutRequested.into())),
        "dismiss" => Ok(Command::Dismiss),
        "help" | "" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_account(rest: &str) -> Option<NewAccount> {
    let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
    match fields.as_slice() {
        [full_name, nickname, email, mobile_number, password]
            if fields.iter().all(|field| !field.is_empty()) =>
        {
            Some(NewAccount {
                full_name: full_name.to_string(),
                nickname: nickname.to_string(),
                email: email.to_string(),
                mobile_number: mobile_number.to_string(),
                password: Secret::new(*password),
            })
        }
        _ => None,
    }
}

/// Action that acknowledges the first pending error of the screen on display.
pub fn dismiss_action(view: &AppViewModel) -> Option<Action> {
    let message = view.errors_to_present.first()?.clone();
    match view.screen {
        ScreenView::SignIn(_) => Some(SignInAction::FinishedPresentingError(message).into()),
        ScreenView::SignUp(_) => Some(SignUpAction::FinishedPresentingError(message).into()),
        ScreenView::SignedIn { .. } => {
            Some(SignedInAction::FinishedPresentingError(message).into())
        }
        ScreenView::Launch | ScreenView::Welcome => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koober_core::{ErrorMessage, SignInViewState};

    #[test]
    fn parses_navigation() {
        assert_eq!(
            parse("goto signup"),
            Ok(Command::Dispatch(OnboardingAction::GoToSignUp.into()))
        );
        assert_eq!(
            parse("  back "),
            Ok(Command::Dispatch(
                OnboardingAction::NavigatedBackToWelcome.into()
            ))
        );
        assert_eq!(parse("goto nowhere"), Err(CommandError::Usage("goto signin | goto signup")));
    }

    #[test]
    fn parses_sign_in_credentials() {
        assert_eq!(
            parse("signin johnny@gmail.com password"),
            Ok(Command::Dispatch(
                SignInAction::SignInRequested {
                    email: "johnny@gmail.com".to_string(),
                    password: Secret::new("password"),
                }
                .into()
            ))
        );
        assert!(parse("signin johnny@gmail.com").is_err());
    }

    #[test]
    fn parses_sign_up_fields() {
        let command = parse("signup Jane Doe; jane; jane@example.com; 555-0100; s3cret").unwrap();
        match command {
            Command::Dispatch(Action::SignUp(SignUpAction::SignUpRequested(account))) => {
                assert_eq!(account.full_name, "Jane Doe");
                assert_eq!(account.mobile_number, "555-0100");
                assert_eq!(account.password.expose(), "s3cret");
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(parse("signup Jane;;jane@example.com;555;pw").is_err());
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse("fly away"),
            Err(CommandError::Unknown("fly".to_string()))
        );
        assert_eq!(parse(""), Ok(Command::Help));
    }

    #[test]
    fn dismiss_targets_current_screen() {
        let view = AppViewModel {
            screen: ScreenView::SignIn(SignInViewState::default()),
            errors_to_present: vec![ErrorMessage::sign_in_failed()],
        };
        assert_eq!(
            dismiss_action(&view),
            Some(SignInAction::FinishedPresentingError(ErrorMessage::sign_in_failed()).into())
        );

        let idle = AppViewModel {
            screen: ScreenView::Welcome,
            errors_to_present: Vec::new(),
        };
        assert_eq!(dismiss_action(&idle), None);
    }
}
