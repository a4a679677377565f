use anchor_lang::prelude::*;

use crate::client::BlogProgram;
use crate::errors::BlogError;
use crate::instructions::ActionContext;
use crate::interaction::TimeSource;
use crate::state::{ActionKind, Post, PostAccounts, PostFields};

pub fn handler<P: BlogProgram, C: TimeSource>(
    ctx: &mut ActionContext<'_, P, C>,
    post_id: u64,
    fields: PostFields,
) -> Result<Post> {
    let caller = ctx.wallet.require_connected()?;
    if ctx.posts.get_by(Some(&caller), post_id).is_none() {
        // someone else's post with this id
        require!(ctx.posts.get(post_id).is_none(), BlogError::UnauthorizedUpdate);
        return err!(BlogError::PostNotFound);
    }
    fields.validate(&ctx.config.limits.in_bytes())?;

    let accounts = PostAccounts::derive(&ctx.config.program_id, caller, post_id);
    let program = &mut *ctx.program;
    let outcome = ctx.status.track(ActionKind::UpdatePost(post_id), || {
        program.update_post(&accounts, &fields.title, &fields.content)
    })?;
    ctx.report(outcome);

    let edited_at = ctx.clock.unix_timestamp();
    let post = ctx.posts.update(Some(&caller), post_id, fields, edited_at)?.clone();

    msg!("Post updated: {}", post.title);

    Ok(post)
}
