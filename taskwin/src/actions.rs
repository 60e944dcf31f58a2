//! Placeholder navigation actions.
//!
//! The action pair a host editor binds to keys: jump the caret to the next or
//! previous answer placeholder, treating the task file's placeholder list as
//! circular. The host passes the task file and caret in explicitly and gets a
//! caret target back; on failure it is expected to take no navigation action.

use crate::{
    navigation::{self, NavigationError},
    placeholder::TaskFile,
};
use thiserror::Error;
use tracing::debug;

/// Direction of placeholder navigation.
///
/// Each direction carries the metadata a host keymap needs to register the
/// action: a stable id and default shortcut notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateDirection {
    /// Move the caret to the next placeholder, wrapping to the first.
    Next,
    /// Move the caret to the previous placeholder, wrapping to the last.
    Previous,
}

impl NavigateDirection {
    /// Stable identifier for the action in this direction.
    pub fn action_id(self) -> &'static str {
        match self {
            Self::Next => "NextPlaceholder",
            Self::Previous => "PreviousPlaceholder",
        }
    }

    /// Default shortcut notations for the action in this direction.
    pub fn default_shortcuts(self) -> &'static [&'static str] {
        match self {
            Self::Next => &["ctrl-shift-.", "ctrl-enter"],
            Self::Previous => &["ctrl-shift-,"],
        }
    }
}

/// Where a navigation action lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Index of the target placeholder in the task file.
    pub index: usize,
    /// Caret offset to move to: the target placeholder's start.
    pub caret: usize,
}

/// Errors from placeholder navigation.
///
/// Both variants mean "do not move the caret"; hosts surface them as a no-op,
/// never a crash, and never retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigateError {
    /// The caret is not inside any placeholder, so there is no position to
    /// step from.
    #[error("no placeholder contains caret offset {caret}")]
    NoPlaceholderAtCaret { caret: usize },

    /// The underlying index step failed.
    #[error(transparent)]
    InvalidPosition(#[from] NavigationError),
}

/// Resolve the placeholder navigation target from the current caret.
///
/// Finds the placeholder containing `caret`, steps its index cyclically in
/// `direction`, and returns the target placeholder's index and start offset.
/// An empty task file or a caret outside every placeholder fails.
pub fn navigate(
    task_file: &TaskFile,
    caret: usize,
    direction: NavigateDirection,
) -> Result<NavigationTarget, NavigateError> {
    let current = task_file
        .placeholder_at(caret)
        .ok_or(NavigateError::NoPlaceholderAtCaret { caret })?;

    let index = match direction {
        NavigateDirection::Next => navigation::next_index(task_file.len(), current)?,
        NavigateDirection::Previous => navigation::previous_index(task_file.len(), current)?,
    };

    // `index` came out of a validated step, so the lookup cannot miss.
    let target = task_file
        .get(index)
        .ok_or(NavigationError::InvalidPosition {
            current: index,
            len: task_file.len(),
        })?;

    debug!(
        action = direction.action_id(),
        from = current,
        to = index,
        caret = target.offset,
        "resolved placeholder navigation"
    );

    Ok(NavigationTarget {
        index,
        caret: target.offset,
    })
}
