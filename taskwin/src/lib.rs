//! Cyclic navigation between answer placeholders in study task files.
//!
//! Study courses mark out "answer placeholders" in a task file: regions the
//! student fills in. This crate gives a host editor the Next/Previous
//! placeholder actions over those regions, with wraparound at either end.
//! The pieces layer top-down:
//!
//! - [`actions`]: the Next/Previous navigation pair a host binds to keys
//! - [`placeholder`]: placeholder regions and the validated task-file list
//! - [`navigation`]: the pure cyclic index step underneath
//!
//! Everything is synchronous and stateless -- callers own the task file and
//! caret, and pass both in on every call.

pub mod actions;
pub mod navigation;
pub mod placeholder;

pub use actions::{navigate, NavigateDirection, NavigateError, NavigationTarget};
pub use navigation::{next_index, previous_index, NavigationError};
pub use placeholder::{AnswerPlaceholder, TaskFile, TaskFileError};
