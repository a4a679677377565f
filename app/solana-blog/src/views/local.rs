use anchor_lang::prelude::*;

use crate::config::BlogConfig;
use crate::errors::BlogError;
use crate::interaction::{Interaction, SystemClock, TimeSource, DELETE_PROMPT};
use crate::state::{FormMode, Post, PostFields, PostForm, PostList};
use crate::views::surface;

pub const WELCOME_TITLE: &str = "Welcome to Solana Blog";
pub const WELCOME_CONTENT: &str = "This is a demonstration of the blog UI. Connect your wallet to interact with the on-chain program.";

/// Blog kept entirely in memory; nothing leaves the page.
pub struct LocalDemoView<C: TimeSource = SystemClock> {
    config: BlogConfig,
    posts: PostList,
    form: PostForm,
    clock: C,
}

impl LocalDemoView<SystemClock> {
    pub fn new(config: BlogConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: TimeSource> LocalDemoView<C> {
    pub fn with_clock(config: BlogConfig, clock: C) -> Self {
        let mut seeded = Vec::new();
        if config.seed_welcome_post {
            seeded.push(Post {
                post_id: 0,
                title: WELCOME_TITLE.into(),
                content: WELCOME_CONTENT.into(),
                timestamp: clock.unix_timestamp(),
                edited_at: None,
                author: None,
            });
        }
        let post_count = seeded.len() as u64;
        let posts = PostList::restore(
            config.post_id_policy,
            config.limits,
            seeded,
            None,
            post_count,
        );

        Self {
            config,
            posts,
            form: PostForm::default(),
            clock,
        }
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.posts()
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn open_create_form(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit_form(&mut self, post_id: u64) -> Result<()> {
        let post = self
            .posts
            .get_by(None, post_id)
            .ok_or(error!(BlogError::PostNotFound))?;
        self.form.open_edit(post);
        Ok(())
    }

    pub fn set_title(&mut self, value: &str) {
        self.form.set_title(value, &self.config.limits);
    }

    pub fn set_content(&mut self, value: &str) {
        self.form.set_content(value, &self.config.limits);
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Submit the open form. On success the form closes and clears; on
    /// failure it stays open with its input.
    pub fn submit(&mut self, ui: &mut dyn Interaction) -> Result<Post> {
        let result = self.form.submission().and_then(|(mode, fields)| match mode {
            FormMode::Edit(post_id) => self.apply_update(post_id, fields),
            _ => self.apply_create(fields),
        });
        if result.is_ok() {
            self.form.cancel();
        }
        surface(ui, result)
    }

    pub fn create_post(
        &mut self,
        ui: &mut dyn Interaction,
        title: &str,
        content: &str,
    ) -> Result<Post> {
        let result = self.apply_create(PostFields::new(title, content));
        surface(ui, result)
    }

    pub fn update_post(
        &mut self,
        ui: &mut dyn Interaction,
        post_id: u64,
        title: &str,
        content: &str,
    ) -> Result<Post> {
        let result = self.apply_update(post_id, PostFields::new(title, content));
        surface(ui, result)
    }

    /// Remove a post after the user confirms. Declining, or an unknown id,
    /// leaves the list as it was.
    pub fn delete_post(&mut self, ui: &mut dyn Interaction, post_id: u64) -> Option<Post> {
        if !ui.confirm(DELETE_PROMPT) {
            return None;
        }
        let removed = self.posts.remove(None, post_id)?;
        msg!("Post deleted: #{}", post_id);
        Some(removed)
    }

    fn apply_create(&mut self, fields: PostFields) -> Result<Post> {
        let timestamp = self.clock.unix_timestamp();
        let post = self.posts.create(fields, None, timestamp)?.clone();
        msg!("Post created: {}", post.title);
        Ok(post)
    }

    fn apply_update(&mut self, post_id: u64, fields: PostFields) -> Result<Post> {
        let edited_at = self.clock.unix_timestamp();
        let post = self.posts.update(None, post_id, fields, edited_at)?.clone();
        msg!("Post updated: {}", post.title);
        Ok(post)
    }
}
