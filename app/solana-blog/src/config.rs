use anchor_lang::prelude::*;

/// Maximum title length, matching the program's `TitleTooLong` check.
pub const TITLE_MAX_LEN: usize = 100;
/// Maximum content length, matching the program's `ContentTooLong` check.
pub const CONTENT_MAX_LEN: usize = 1000;

/// How new posts are numbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PostIdPolicy {
    /// `post_id` is the current number of posts. After a delete, the next
    /// create can reuse an id still held by a surviving post.
    ListLength,
    /// `post_id` comes from a counter that only grows, like `Blog.post_count`.
    #[default]
    Monotonic,
}

/// What a field cap counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// UTF-8 bytes, as the program's `String::len` checks do.
    #[default]
    Bytes,
    /// Unicode scalar values, as a browser `maxLength` roughly does.
    Chars,
}

impl LengthUnit {
    pub fn measure(self, value: &str) -> usize {
        match self {
            LengthUnit::Bytes => value.len(),
            LengthUnit::Chars => value.chars().count(),
        }
    }
}

/// Caps for post fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLimits {
    pub title_max: usize,
    pub content_max: usize,
    pub unit: LengthUnit,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            title_max: TITLE_MAX_LEN,
            content_max: CONTENT_MAX_LEN,
            unit: LengthUnit::default(),
        }
    }
}

impl FieldLimits {
    /// The same caps counted in bytes. Anything sent to the program must
    /// pass these.
    pub fn in_bytes(self) -> Self {
        Self {
            unit: LengthUnit::Bytes,
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogConfig {
    /// Program owning the blog and post accounts
    pub program_id: Pubkey,
    pub limits: FieldLimits,
    pub post_id_policy: PostIdPolicy,
    /// Start the local demo with the welcome post
    pub seed_welcome_post: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            program_id: crate::ID,
            limits: FieldLimits::default(),
            post_id_policy: PostIdPolicy::default(),
            seed_welcome_post: true,
        }
    }
}

impl BlogConfig {
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_limits(mut self, limits: FieldLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_post_id_policy(mut self, policy: PostIdPolicy) -> Self {
        self.post_id_policy = policy;
        self
    }

    pub fn with_welcome_post(mut self, seed: bool) -> Self {
        self.seed_welcome_post = seed;
        self
    }
}
