use anchor_lang::prelude::*;

use crate::client::BlogProgram;
use crate::errors::BlogError;
use crate::instructions::ActionContext;
use crate::interaction::TimeSource;
use crate::state::{ActionKind, BlogAccounts};

pub fn handler<P: BlogProgram, C: TimeSource>(ctx: &mut ActionContext<'_, P, C>) -> Result<Pubkey> {
    let authority = ctx.wallet.require_connected()?;
    require!(ctx.blog.is_none(), BlogError::BlogAlreadyInitialized);

    let accounts = BlogAccounts::derive(&ctx.config.program_id, authority);
    let program = &mut *ctx.program;
    let outcome = ctx
        .status
        .track(ActionKind::InitializeBlog, || program.initialize_blog(&accounts))?;
    ctx.report(outcome);

    *ctx.blog = Some(accounts.blog);

    msg!("Blog initialized for authority: {}", authority);

    Ok(accounts.blog)
}
