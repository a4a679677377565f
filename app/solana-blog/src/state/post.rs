use anchor_lang::prelude::*;

use crate::config::FieldLimits;
use crate::errors::BlogError;

/// A single blog entry held in the page's memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    /// Sequence number within the author's blog
    pub post_id: u64,
    pub title: String,
    pub content: String,
    /// Unix seconds at creation, never changed by an update
    pub timestamp: i64,
    /// Unix seconds of the last update
    pub edited_at: Option<i64>,
    /// Creator identity; the local demo has none
    pub author: Option<Pubkey>,
}

impl Post {
    pub fn is_authored_by(&self, identity: &Pubkey) -> bool {
        self.author.as_ref() == Some(identity)
    }
}

/// Title and content as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
}

impl PostFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Blank checks look at the trimmed text; lengths measure the raw text,
    /// which is what gets stored, in `limits.unit`.
    pub fn validate(&self, limits: &FieldLimits) -> Result<()> {
        let title_blank = self.title.trim().is_empty();
        let content_blank = self.content.trim().is_empty();

        require!(
            !(title_blank && content_blank),
            BlogError::TitleAndContentEmpty
        );
        require!(!title_blank, BlogError::TitleEmpty);
        require!(!content_blank, BlogError::ContentEmpty);
        require!(
            limits.unit.measure(&self.title) <= limits.title_max,
            BlogError::TitleTooLong
        );
        require!(
            limits.unit.measure(&self.content) <= limits.content_max,
            BlogError::ContentTooLong
        );

        Ok(())
    }
}
