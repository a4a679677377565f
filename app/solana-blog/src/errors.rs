use anchor_lang::error::Error;
use anchor_lang::prelude::*;

#[error_code]
pub enum BlogError {
    #[msg("Title is too long (max 100 characters)")]
    TitleTooLong,
    #[msg("Content is too long (max 1000 characters)")]
    ContentTooLong,
    #[msg("Title cannot be empty")]
    TitleEmpty,
    #[msg("Content cannot be empty")]
    ContentEmpty,
    #[msg("Please fill in both title and content")]
    TitleAndContentEmpty,
    #[msg("Only the author can update this post")]
    UnauthorizedUpdate,
    #[msg("Only the author can delete this post")]
    UnauthorizedDelete,
    #[msg("Math overflow detected")]
    MathOverflow,
    #[msg("Please connect your wallet first")]
    WalletNotConnected,
    #[msg("Blog is already initialized for this wallet")]
    BlogAlreadyInitialized,
    #[msg("Blog account belongs to a different authority")]
    BlogAuthorityMismatch,
    #[msg("Post not found")]
    PostNotFound,
    #[msg("Post form is not open")]
    FormNotOpen,
    #[msg("This action is already in progress")]
    ActionInFlight,
}

/// Text shown to the user for a failed action.
pub fn notice_text(err: &Error) -> String {
    match err {
        Error::AnchorError(e) => e.error_msg.clone(),
        Error::ProgramError(e) => e.program_error.to_string(),
    }
}
