use anchor_lang::prelude::*;

use crate::interaction::WalletState;
use crate::state::Post;

pub const PAGE_TITLE: &str = "Solana Blog dApp";
pub const EMPTY_HINT: &str = "No posts yet. Create your first post!";

/// Plain-text page: nav, main post list, footer.
pub fn render_page(posts: &[Post], wallet: &WalletState, program_id: &Pubkey) -> String {
    let mut lines = render_nav(wallet);
    lines.extend(render_main(posts));
    lines.extend(render_footer(program_id));

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

fn render_nav(wallet: &WalletState) -> Vec<String> {
    let status = match wallet.public_key() {
        Some(key) => format!("Wallet Connected: {key}"),
        None => "Wallet Not Connected".to_string(),
    };
    vec![PAGE_TITLE.to_string(), status, String::new()]
}

fn render_main(posts: &[Post]) -> Vec<String> {
    let mut lines = vec![format!("Blog Posts ({})", posts.len())];
    if posts.is_empty() {
        lines.push(EMPTY_HINT.to_string());
    }
    for post in posts {
        let mut meta = format!("Post #{} | {}", post.post_id, post.timestamp);
        if let Some(edited_at) = post.edited_at {
            meta.push_str(&format!(" (edited {edited_at})"));
        }
        lines.extend([String::new(), post.title.clone(), post.content.clone(), meta]);
    }
    lines.push(String::new());
    lines
}

fn render_footer(program_id: &Pubkey) -> Vec<String> {
    vec![
        "Built with Anchor Framework on Solana Devnet".to_string(),
        format!("Program ID: {program_id}"),
    ]
}
