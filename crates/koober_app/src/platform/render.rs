use koober_core::{AppViewModel, LifecycleEvent, ScreenContainer, ScreenId, ScreenView};
use koober_logging::koober_debug;

/// Keeps the screen hierarchy in step with published view models and turns
/// them into terminal lines.
pub struct Presenter {
    container: ScreenContainer,
    presented: Option<ScreenId>,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            container: ScreenContainer::new(),
            presented: None,
        }
    }

    pub fn present(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();
        let screen = view.screen.id();
        if self.presented != Some(screen) {
            self.swap_to(&view.screen);
            lines.push(format!("== {} ==", title(screen)));
        }
        lines.push(describe(&view.screen));
        for error in &view.errors_to_present {
            lines.push(format!(
                "! {}: {} (type `dismiss`)",
                error.title,
                error.message.replace('\n', " ")
            ));
        }
        lines
    }

    fn swap_to(&mut self, screen: &ScreenView) {
        let mut events = Vec::new();
        if let Some(previous) = self.presented.take() {
            events.extend(self.container.remove(previous));
        }

        let parent = screen.container();
        if parent == ScreenId::Onboarding {
            events.extend(
                self.container
                    .add_full_screen(ScreenId::Main, ScreenId::Onboarding),
            );
        } else {
            events.extend(self.container.remove(ScreenId::Onboarding));
        }
        events.extend(self.container.add_full_screen(parent, screen.id()));
        self.presented = Some(screen.id());

        for event in events {
            log_event(event);
        }
    }
}

fn log_event(event: LifecycleEvent) {
    match event {
        LifecycleEvent::WillMoveToParent { child, parent } => {
            koober_debug!("{child:?} will move to {parent:?}");
        }
        LifecycleEvent::DidMoveToParent { child, parent } => {
            koober_debug!("{child:?} did move to {parent:?}");
        }
        LifecycleEvent::RemovedFromParent { child, parent } => {
            koober_debug!("{child:?} removed from {parent:?}");
        }
    }
}

fn title(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Main | ScreenId::Onboarding | ScreenId::Launch => "Koober",
        ScreenId::Welcome => "Welcome",
        ScreenId::SignIn => "Sign In",
        ScreenId::SignUp => "Sign Up",
        ScreenId::SignedIn => "Pick Me Up",
    }
}

fn describe(screen: &ScreenView) -> String {
    match screen {
        ScreenView::Launch => "loading...".to_string(),
        ScreenView::Welcome => "goto signin | goto signup".to_string(),
        ScreenView::SignIn(view) => {
            if view.activity_indicator_animating {
                "signing in...".to_string()
            } else {
                "signin <email> <password> | back".to_string()
            }
        }
        ScreenView::SignUp(view) => {
            if view.activity_indicator_animating {
                "signing up...".to_string()
            } else {
                "signup <full name>;<nickname>;<email>;<mobile>;<password> | back".to_string()
            }
        }
        ScreenView::SignedIn { name, signing_out } => {
            if *signing_out {
                format!("signing out {name}...")
            } else {
                format!("signed in as {name} | signout")
            }
        }
    }
}
