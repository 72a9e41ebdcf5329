use koober_core::{LifecycleEvent, ScreenContainer, ScreenId};

#[test]
fn add_full_screen_links_child_and_notifies() {
    let mut container = ScreenContainer::new();
    let events = container.add_full_screen(ScreenId::Onboarding, ScreenId::Welcome);

    assert_eq!(
        events,
        vec![
            LifecycleEvent::WillMoveToParent {
                child: ScreenId::Welcome,
                parent: Some(ScreenId::Onboarding),
            },
            LifecycleEvent::DidMoveToParent {
                child: ScreenId::Welcome,
                parent: ScreenId::Onboarding,
            },
        ]
    );
    assert_eq!(container.parent_of(ScreenId::Welcome), Some(ScreenId::Onboarding));
}

#[test]
fn add_full_screen_twice_is_noop() {
    let mut container = ScreenContainer::new();
    container.add_full_screen(ScreenId::Onboarding, ScreenId::SignIn);
    let before = container.clone();

    let events = container.add_full_screen(ScreenId::Onboarding, ScreenId::SignIn);
    assert!(events.is_empty());
    assert_eq!(container, before);

    // Already attached elsewhere: the existing link wins.
    let events = container.add_full_screen(ScreenId::Main, ScreenId::SignIn);
    assert!(events.is_empty());
    assert_eq!(container.parent_of(ScreenId::SignIn), Some(ScreenId::Onboarding));
}

#[test]
fn remove_detaches_once() {
    let mut container = ScreenContainer::new();
    container.add_full_screen(ScreenId::Main, ScreenId::Onboarding);
    container.add_full_screen(ScreenId::Onboarding, ScreenId::SignUp);

    let events = container.remove(ScreenId::SignUp);
    assert_eq!(
        events,
        vec![
            LifecycleEvent::WillMoveToParent {
                child: ScreenId::SignUp,
                parent: None,
            },
            LifecycleEvent::RemovedFromParent {
                child: ScreenId::SignUp,
                parent: ScreenId::Onboarding,
            },
        ]
    );
    assert!(container.remove(ScreenId::SignUp).is_empty());
    assert_eq!(container.children_of(ScreenId::Main), vec![ScreenId::Onboarding]);
    assert!(container.children_of(ScreenId::Onboarding).is_empty());
}

#[test]
fn screen_cannot_contain_itself() {
    let mut container = ScreenContainer::new();
    assert!(container.add_full_screen(ScreenId::Main, ScreenId::Main).is_empty());
    assert_eq!(container.parent_of(ScreenId::Main), None);
}
