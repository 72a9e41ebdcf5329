use std::collections::BTreeMap;

use crate::ScreenId;

/// Notification sent to a child screen while it is attached or detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    WillMoveToParent {
        child: ScreenId,
        parent: Option<ScreenId>,
    },
    DidMoveToParent {
        child: ScreenId,
        parent: ScreenId,
    },
    RemovedFromParent {
        child: ScreenId,
        parent: ScreenId,
    },
}

/// Parent/child links between screens.
///
/// A screen has at most one parent. Attaching an attached screen and
/// detaching a detached one are both no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenContainer {
    parents: BTreeMap<ScreenId, ScreenId>,
}

impl ScreenContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `child` so it fills `parent`.
    pub fn add_full_screen(&mut self, parent: ScreenId, child: ScreenId) -> Vec<LifecycleEvent> {
        if parent == child || self.parents.contains_key(&child) {
            return Vec::new();
        }
        self.parents.insert(child, parent);
        vec![
            LifecycleEvent::WillMoveToParent {
                child,
                parent: Some(parent),
            },
            LifecycleEvent::DidMoveToParent { child, parent },
        ]
    }

    pub fn remove(&mut self, child: ScreenId) -> Vec<LifecycleEvent> {
        let Some(parent) = self.parents.remove(&child) else {
            return Vec::new();
        };
        vec![
            LifecycleEvent::WillMoveToParent {
                child,
                parent: None,
            },
            LifecycleEvent::RemovedFromParent { child, parent },
        ]
    }

    pub fn parent_of(&self, child: ScreenId) -> Option<ScreenId> {
        self.parents.get(&child).copied()
    }

    pub fn children_of(&self, parent: ScreenId) -> Vec<ScreenId> {
        self.parents
            .iter()
            .filter(|(_, p)| **p == parent)
            .map(|(child, _)| *child)
            .collect()
    }
}
