use anchor_lang::prelude::*;

use crate::client::BlogProgram;
use crate::instructions::ActionContext;
use crate::interaction::TimeSource;
use crate::state::{ActionKind, Post, PostAccounts, PostFields};

pub fn handler<P: BlogProgram, C: TimeSource>(
    ctx: &mut ActionContext<'_, P, C>,
    fields: PostFields,
) -> Result<Post> {
    let authority = ctx.wallet.require_connected()?;
    fields.validate(&ctx.config.limits.in_bytes())?;

    // the counter must be able to advance before anything is sent
    let post_id = ctx.posts.reserve_post_id(Some(&authority))?;
    let accounts = PostAccounts::derive(&ctx.config.program_id, authority, post_id);

    let program = &mut *ctx.program;
    let outcome = ctx.status.track(ActionKind::CreatePost, || {
        program.create_post(&accounts, &fields.title, &fields.content)
    })?;
    ctx.report(outcome);

    let timestamp = ctx.clock.unix_timestamp();
    let post = ctx.posts.create(fields, Some(authority), timestamp)?.clone();

    msg!("Post created: {} by {}", post.title, authority);

    Ok(post)
}
