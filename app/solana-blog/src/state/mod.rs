pub mod accounts;
pub mod form;
pub mod pda;
pub mod post;
pub mod post_list;
pub mod status;

pub use accounts::*;
pub use form::*;
pub use pda::*;
pub use post::*;
pub use post_list::*;
pub use status::*;
