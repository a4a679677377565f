pub mod create_post;
pub mod delete_post;
pub mod initialize_blog;
pub mod update_post;

use anchor_lang::prelude::*;

use crate::client::{BlogProgram, CallOutcome};
use crate::config::BlogConfig;
use crate::interaction::{Interaction, Notice, TimeSource, WalletState};
use crate::state::{ActionTracker, PostList};

/// Everything a wallet-integrated action reads or mutates.
pub struct ActionContext<'a, P: BlogProgram, C: TimeSource> {
    pub config: &'a BlogConfig,
    pub wallet: &'a WalletState,
    pub program: &'a mut P,
    pub clock: &'a C,
    pub posts: &'a mut PostList,
    /// Blog account once initialized or synced
    pub blog: &'a mut Option<Pubkey>,
    pub status: &'a mut ActionTracker,
    pub ui: &'a mut dyn Interaction,
}

impl<P: BlogProgram, C: TimeSource> ActionContext<'_, P, C> {
    /// Surface a placeholder outcome before the local state changes.
    pub(crate) fn report(&mut self, outcome: CallOutcome) {
        if let CallOutcome::Placeholder(message) = outcome {
            self.ui.notify(Notice::info(message));
        }
    }
}
