use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::config::{FieldLimits, PostIdPolicy};
use crate::errors::BlogError;
use crate::state::{Post, PostFields};

/// Ordered posts of the current session, in insertion order.
///
/// Ids are numbered per author, like one blog account per wallet. Posts
/// without an author (the local demo) share one sequence.
#[derive(Clone, Debug, Default)]
pub struct PostList {
    posts: Vec<Post>,
    /// Next id per author under `PostIdPolicy::Monotonic`
    post_counts: HashMap<Option<Pubkey>, u64>,
    policy: PostIdPolicy,
    limits: FieldLimits,
}

impl PostList {
    pub fn new(policy: PostIdPolicy, limits: FieldLimits) -> Self {
        Self {
            posts: Vec::new(),
            post_counts: HashMap::new(),
            policy,
            limits,
        }
    }

    /// Rebuild a list from posts fetched elsewhere. The counter of `owner`
    /// resumes at `post_count`; every author resumes past its highest id.
    pub fn restore(
        policy: PostIdPolicy,
        limits: FieldLimits,
        posts: Vec<Post>,
        owner: Option<Pubkey>,
        post_count: u64,
    ) -> Self {
        let mut post_counts: HashMap<Option<Pubkey>, u64> = HashMap::new();
        post_counts.insert(owner, post_count);
        for post in &posts {
            let count = post_counts.entry(post.author).or_default();
            *count = (*count).max(post.post_id.saturating_add(1));
        }

        Self {
            posts,
            post_counts,
            policy,
            limits,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn limits(&self) -> &FieldLimits {
        &self.limits
    }

    /// First post with `post_id`, whoever wrote it.
    pub fn get(&self, post_id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.post_id == post_id)
    }

    /// First post with `post_id` written by `author`.
    pub fn get_by(&self, author: Option<&Pubkey>, post_id: u64) -> Option<&Post> {
        self.position(author, post_id).map(|index| &self.posts[index])
    }

    /// Id the next `create` by `author` will assign.
    pub fn next_post_id(&self, author: Option<&Pubkey>) -> u64 {
        match self.policy {
            PostIdPolicy::ListLength => self
                .posts
                .iter()
                .filter(|p| p.author.as_ref() == author)
                .count() as u64,
            PostIdPolicy::Monotonic => self.post_count(author),
        }
    }

    /// Id the next `create` by `author` will assign, failing when the
    /// counter cannot advance past it.
    pub fn reserve_post_id(&self, author: Option<&Pubkey>) -> Result<u64> {
        let post_id = self.next_post_id(author);
        self.advanced_count(author, post_id)?;
        Ok(post_id)
    }

    pub fn create(
        &mut self,
        fields: PostFields,
        author: Option<Pubkey>,
        timestamp: i64,
    ) -> Result<&Post> {
        fields.validate(&self.limits)?;

        let post_id = self.next_post_id(author.as_ref());
        let count = self.advanced_count(author.as_ref(), post_id)?;
        self.post_counts.insert(author, count);

        self.posts.push(Post {
            post_id,
            title: fields.title,
            content: fields.content,
            timestamp,
            edited_at: None,
            author,
        });

        Ok(&self.posts[self.posts.len() - 1])
    }

    /// Replace title and content of `author`'s first post with `post_id`.
    pub fn update(
        &mut self,
        author: Option<&Pubkey>,
        post_id: u64,
        fields: PostFields,
        edited_at: i64,
    ) -> Result<&Post> {
        let index = self
            .position(author, post_id)
            .ok_or(error!(BlogError::PostNotFound))?;
        fields.validate(&self.limits)?;

        let post = &mut self.posts[index];
        post.title = fields.title;
        post.content = fields.content;
        post.edited_at = Some(edited_at);

        Ok(&*post)
    }

    /// Remove `author`'s first post with `post_id`; a missing id is a no-op.
    pub fn remove(&mut self, author: Option<&Pubkey>, post_id: u64) -> Option<Post> {
        let index = self.position(author, post_id)?;
        Some(self.posts.remove(index))
    }

    fn post_count(&self, author: Option<&Pubkey>) -> u64 {
        self.post_counts
            .get(&author.copied())
            .copied()
            .unwrap_or_default()
    }

    fn advanced_count(&self, author: Option<&Pubkey>, post_id: u64) -> Result<u64> {
        post_id
            .max(self.post_count(author))
            .checked_add(1)
            .ok_or(error!(BlogError::MathOverflow))
    }

    fn position(&self, author: Option<&Pubkey>, post_id: u64) -> Option<usize> {
        self.posts
            .iter()
            .position(|p| p.post_id == post_id && p.author.as_ref() == author)
    }
}
