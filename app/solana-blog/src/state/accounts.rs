use anchor_lang::prelude::*;

use crate::state::Post;

/// Blog account: one per authority, owns the post counter.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Blog {
    /// The wallet that owns this blog
    pub authority: Pubkey,
    /// Posts ever created; never decremented
    pub post_count: u64,
}

/// Post account: one per post, closed on delete.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub author: Pubkey,
    #[max_len(100)]
    pub title: String,
    // deployed accounts reserve 2000 bytes; submissions stop at 1000
    #[max_len(2000)]
    pub content: String,
    pub post_id: u64,
    /// Unix seconds of the last create or update
    pub timestamp: i64,
}

impl Blog {
    /// Discriminator included
    pub const SIZE: usize = 8 + Blog::INIT_SPACE;

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut data = data;
        Blog::try_deserialize(&mut data)
    }
}

impl BlogPost {
    /// Discriminator included
    pub const SIZE: usize = 8 + BlogPost::INIT_SPACE;

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut data = data;
        BlogPost::try_deserialize(&mut data)
    }
}

impl From<BlogPost> for Post {
    fn from(account: BlogPost) -> Self {
        Post {
            post_id: account.post_id,
            title: account.title,
            content: account.content,
            timestamp: account.timestamp,
            edited_at: None,
            author: Some(account.author),
        }
    }
}
