use anchor_lang::prelude::*;

use crate::config::{FieldLimits, LengthUnit};
use crate::errors::BlogError;
use crate::state::{Post, PostFields};

/// What submitting the form will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Hidden,
    Create,
    Edit(u64),
}

/// Create/edit form. Input is truncated to the field caps as it is typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    mode: FormMode,
    fields: PostFields,
}

impl PostForm {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Hidden
    }

    pub fn fields(&self) -> &PostFields {
        &self.fields
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.fields = PostFields::default();
    }

    /// Open prefilled with an existing post.
    pub fn open_edit(&mut self, post: &Post) {
        self.mode = FormMode::Edit(post.post_id);
        self.fields = PostFields::new(post.title.clone(), post.content.clone());
    }

    pub fn set_title(&mut self, value: &str, limits: &FieldLimits) {
        self.fields.title = truncate(value, limits.title_max, limits.unit);
    }

    pub fn set_content(&mut self, value: &str, limits: &FieldLimits) {
        self.fields.content = truncate(value, limits.content_max, limits.unit);
    }

    /// Close and clear.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Mode and a copy of the input, ready to submit.
    pub fn submission(&self) -> Result<(FormMode, PostFields)> {
        require!(self.is_open(), BlogError::FormNotOpen);
        Ok((self.mode, self.fields.clone()))
    }
}

/// Longest prefix within `max`, cut on a character boundary.
fn truncate(value: &str, max: usize, unit: LengthUnit) -> String {
    let end = match unit {
        LengthUnit::Chars => value.char_indices().nth(max).map(|(end, _)| end),
        LengthUnit::Bytes if value.len() > max => {
            (0..=max).rev().find(|&end| value.is_char_boundary(end))
        }
        LengthUnit::Bytes => None,
    };
    match end {
        Some(end) => value[..end].to_string(),
        None => value.to_string(),
    }
}
