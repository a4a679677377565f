use anchor_lang::prelude::*;

use crate::client::BlogProgram;
use crate::errors::BlogError;
use crate::instructions::ActionContext;
use crate::interaction::{TimeSource, DELETE_PROMPT};
use crate::state::{ActionKind, Post, PostAccounts};

/// Returns `None` when the user declines the confirmation.
pub fn handler<P: BlogProgram, C: TimeSource>(
    ctx: &mut ActionContext<'_, P, C>,
    post_id: u64,
) -> Result<Option<Post>> {
    let caller = ctx.wallet.require_connected()?;
    if ctx.posts.get_by(Some(&caller), post_id).is_none() {
        // someone else's post with this id
        require!(ctx.posts.get(post_id).is_none(), BlogError::UnauthorizedDelete);
        return err!(BlogError::PostNotFound);
    }

    if !ctx.ui.confirm(DELETE_PROMPT) {
        return Ok(None);
    }

    let accounts = PostAccounts::derive(&ctx.config.program_id, caller, post_id);
    let program = &mut *ctx.program;
    let outcome = ctx
        .status
        .track(ActionKind::DeletePost(post_id), || program.delete_post(&accounts))?;
    ctx.report(outcome);

    let removed = ctx.posts.remove(Some(&caller), post_id);

    msg!("Post deleted: #{}", post_id);

    Ok(removed)
}
