use solana_program::pubkey::Pubkey;

pub const BLOG_SEED: &[u8] = b"blog";
pub const POST_SEED: &[u8] = b"post";

/// Blog account of `authority`: seeds = ["blog", authority]
pub fn derive_blog_pda(program_id: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BLOG_SEED, authority.as_ref()], program_id)
}

/// Post account: seeds = ["post", blog, post_id as 8 little-endian bytes]
pub fn derive_post_pda(program_id: &Pubkey, blog: &Pubkey, post_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POST_SEED, blog.as_ref(), &post_id.to_le_bytes()],
        program_id,
    )
}

/// Accounts an `initialize_blog` call touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogAccounts {
    pub blog: Pubkey,
    pub authority: Pubkey,
}

impl BlogAccounts {
    pub fn derive(program_id: &Pubkey, authority: Pubkey) -> Self {
        let (blog, _) = derive_blog_pda(program_id, &authority);
        Self { blog, authority }
    }
}

/// Accounts a post-level call touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostAccounts {
    pub blog: Pubkey,
    pub post: Pubkey,
    pub author: Pubkey,
    pub post_id: u64,
}

impl PostAccounts {
    pub fn derive(program_id: &Pubkey, author: Pubkey, post_id: u64) -> Self {
        let (blog, _) = derive_blog_pda(program_id, &author);
        let (post, _) = derive_post_pda(program_id, &blog, post_id);
        Self {
            blog,
            post,
            author,
            post_id,
        }
    }
}
