use anchor_lang::prelude::*;

pub mod client;
pub mod config;
pub mod errors;
pub mod instructions;
pub mod interaction;
pub mod shell;
pub mod state;
pub mod views;

pub use client::{BlogProgram, CallOutcome, PlaceholderProgram};
pub use config::{BlogConfig, FieldLimits, LengthUnit, PostIdPolicy};
pub use errors::BlogError;
pub use interaction::{FixedClock, Interaction, Notice, ScriptedInteraction, SystemClock, TimeSource, WalletState};
pub use state::{Post, PostFields, PostList};
pub use views::{LocalDemoView, WalletView};

declare_id!("DBy3PaPJ9v3bTQgidFdfZiBcsJv4B6YwoAAd8b88JhGE");
