pub mod local;
pub mod wallet;

pub use local::*;
pub use wallet::*;

use anchor_lang::prelude::*;

use crate::errors::notice_text;
use crate::interaction::{Interaction, Notice};

/// Show a failed action to the user; the result is passed through.
fn surface<T>(ui: &mut dyn Interaction, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        ui.notify(Notice::error(notice_text(err)));
    }
    result
}
