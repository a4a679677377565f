use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use anchor_lang::prelude::*;

use crate::errors::BlogError;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// The user on the other side of the page.
pub trait Interaction {
    fn notify(&mut self, notice: Notice);

    /// `true` when the user accepts.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Headless user: records notices and prompts, answers confirmations from
/// a queue and then with a fixed default.
#[derive(Debug)]
pub struct ScriptedInteraction {
    pub notices: Vec<Notice>,
    pub prompts: Vec<String>,
    answers: VecDeque<bool>,
    default_answer: bool,
}

impl ScriptedInteraction {
    pub fn accepting() -> Self {
        Self::with_default(true)
    }

    pub fn declining() -> Self {
        Self::with_default(false)
    }

    fn with_default(default_answer: bool) -> Self {
        Self {
            notices: Vec::new(),
            prompts: Vec::new(),
            answers: VecDeque::new(),
            default_answer,
        }
    }

    pub fn answer_next(&mut self, accept: bool) -> &mut Self {
        self.answers.push_back(accept);
        self
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Interaction for ScriptedInteraction {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }
}

/// Wallet adapter state as seen by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    public_key: Option<Pubkey>,
}

impl WalletState {
    pub fn connected(public_key: Pubkey) -> Self {
        Self {
            public_key: Some(public_key),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.public_key.is_some()
    }

    pub fn public_key(&self) -> Option<Pubkey> {
        self.public_key
    }

    /// Identity of the connected wallet.
    pub fn require_connected(&self) -> Result<Pubkey> {
        self.public_key
            .ok_or(error!(BlogError::WalletNotConnected))
    }
}

/// Source of unix timestamps for new posts.
pub trait TimeSource {
    fn unix_timestamp(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl TimeSource for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}
