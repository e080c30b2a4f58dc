//! Game session: commands in, outcomes out.
//!
//! ## Key Types
//!
//! - `Command`: one parsed line of player input
//! - `Outcome`: what a command did, with a status line
//! - `Session`: owns deck, pool and counters; applies commands
//! - `GameSummary`: the final report once `Session::is_terminal` fires

pub mod command;
pub mod outcome;
pub mod session;

pub use command::{Command, SelectionError};
pub use outcome::Outcome;
pub use session::{Claimant, EndReason, EventRecord, GameSummary, Session, SessionEvent};
