use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::errors::{notice_text, BlogError};

/// An action a user can trigger. Post-level actions are keyed by post so
/// that working on one post never blocks another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    InitializeBlog,
    CreatePost,
    UpdatePost(u64),
    DeletePost(u64),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl ActionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ActionStatus::InFlight)
    }
}

/// Status of every action that has run this session.
#[derive(Debug, Default)]
pub struct ActionTracker {
    statuses: HashMap<ActionKind, ActionStatus>,
}

impl ActionTracker {
    pub fn status(&self, kind: ActionKind) -> ActionStatus {
        self.statuses.get(&kind).cloned().unwrap_or_default()
    }

    pub fn is_in_flight(&self, kind: ActionKind) -> bool {
        self.statuses
            .get(&kind)
            .map_or(false, ActionStatus::is_in_flight)
    }

    pub fn begin(&mut self, kind: ActionKind) -> Result<()> {
        require!(!self.is_in_flight(kind), BlogError::ActionInFlight);
        self.statuses.insert(kind, ActionStatus::InFlight);
        Ok(())
    }

    pub fn finish<T>(&mut self, kind: ActionKind, outcome: &Result<T>) {
        let status = match outcome {
            Ok(_) => ActionStatus::Succeeded,
            Err(err) => ActionStatus::Failed(notice_text(err)),
        };
        self.statuses.insert(kind, status);
    }

    /// Run `call` as `kind`, recording its outcome.
    pub fn track<T>(&mut self, kind: ActionKind, call: impl FnOnce() -> Result<T>) -> Result<T> {
        self.begin(kind)?;
        let outcome = call();
        self.finish(kind, &outcome);
        outcome
    }
}
