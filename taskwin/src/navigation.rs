//! Cyclic index navigation over an ordered sequence.
//!
//! The navigator is a pair of pure functions over `(len, current)`: step to the
//! neighbouring index, wrapping past either end. It never sees the sequence
//! itself and keeps no state, so callers pass the length and position
//! explicitly on every call.

use thiserror::Error;

/// Errors from cyclic index navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The supplied position is not a valid index into the sequence.
    ///
    /// Raised when `current >= len`, which also covers the empty sequence
    /// (`len == 0` admits no valid position). Callers are expected to treat
    /// this as "do not move" rather than an abort.
    #[error("position {current} is out of range for a sequence of length {len}")]
    InvalidPosition { current: usize, len: usize },
}

/// The index after `current`, wrapping from the last index back to 0.
///
/// Fails with [`NavigationError::InvalidPosition`] unless `current < len`;
/// a returned index is always in `0..len`.
pub fn next_index(len: usize, current: usize) -> Result<usize, NavigationError> {
    validate(len, current)?;
    Ok((current + 1) % len)
}

/// The index before `current`, wrapping from 0 to the last index.
///
/// Fails with [`NavigationError::InvalidPosition`] unless `current < len`;
/// a returned index is always in `0..len`.
pub fn previous_index(len: usize, current: usize) -> Result<usize, NavigationError> {
    validate(len, current)?;
    Ok((current + len - 1) % len)
}

fn validate(len: usize, current: usize) -> Result<(), NavigationError> {
    if current < len {
        Ok(())
    } else {
        Err(NavigationError::InvalidPosition { current, len })
    }
}
