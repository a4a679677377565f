use anchor_lang::prelude::*;

use crate::state::{BlogAccounts, PostAccounts};

pub const INITIALIZE_PLACEHOLDER: &str =
    "Blog initialization would happen here. Deploy the program to Devnet first!";
pub const CREATE_PLACEHOLDER: &str =
    "Post creation would happen here. Deploy the program to Devnet first!";
pub const UPDATE_PLACEHOLDER: &str =
    "Post update would happen here. Deploy the program to Devnet first!";
pub const DELETE_PLACEHOLDER: &str =
    "Post deletion would happen here. Deploy the program to Devnet first!";

/// How a program call ended when it did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallOutcome {
    /// The transaction landed
    Confirmed,
    /// Nothing was sent; the message is shown to the user instead
    Placeholder(String),
}

/// Client of the on-chain `solana_blog` program.
pub trait BlogProgram {
    fn initialize_blog(&mut self, accounts: &BlogAccounts) -> Result<CallOutcome>;

    fn create_post(
        &mut self,
        accounts: &PostAccounts,
        title: &str,
        content: &str,
    ) -> Result<CallOutcome>;

    fn update_post(
        &mut self,
        accounts: &PostAccounts,
        title: &str,
        content: &str,
    ) -> Result<CallOutcome>;

    /// Closes the post account, returning its rent to the author.
    fn delete_post(&mut self, accounts: &PostAccounts) -> Result<CallOutcome>;
}

/// Stand-in used until the program is deployed: every call reports what
/// would have happened.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderProgram;

impl BlogProgram for PlaceholderProgram {
    fn initialize_blog(&mut self, _accounts: &BlogAccounts) -> Result<CallOutcome> {
        Ok(CallOutcome::Placeholder(INITIALIZE_PLACEHOLDER.into()))
    }

    fn create_post(&mut self, _accounts: &PostAccounts, _: &str, _: &str) -> Result<CallOutcome> {
        Ok(CallOutcome::Placeholder(CREATE_PLACEHOLDER.into()))
    }

    fn update_post(&mut self, _accounts: &PostAccounts, _: &str, _: &str) -> Result<CallOutcome> {
        Ok(CallOutcome::Placeholder(UPDATE_PLACEHOLDER.into()))
    }

    fn delete_post(&mut self, _accounts: &PostAccounts) -> Result<CallOutcome> {
        Ok(CallOutcome::Placeholder(DELETE_PLACEHOLDER.into()))
    }
}
