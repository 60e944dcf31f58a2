use crate::cli::NavArgs;
use std::{fs, path::Path};
use taskwin::{navigate, NavigateDirection, NavigationTarget, TaskFile};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum NavCommandError {
    #[error("failed to read task file {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse task file {path}: {source}")]
    ParseFailed {
        path: String,
        source: serde_json::Error,
    },
}

pub fn handle(args: &NavArgs, direction: NavigateDirection) -> Result<(), NavCommandError> {
    match resolve(&args.file, args.caret, direction)? {
        Some(target) => {
            println!("placeholder {} offset {}", target.index, target.caret);
        },
        None => {
            // Navigation from an invalid position is a no-op, not a failure.
            eprintln!("no placeholder at caret {}; caret not moved", args.caret);
        },
    }
    Ok(())
}

/// Load the task file and resolve the navigation target.
///
/// `Ok(None)` means the caret was not inside any placeholder (or the file has
/// none); only IO and parse problems are errors.
pub fn resolve(
    path: &Path,
    caret: usize,
    direction: NavigateDirection,
) -> Result<Option<NavigationTarget>, NavCommandError> {
    let contents = fs::read_to_string(path).map_err(|source| NavCommandError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    let task_file: TaskFile =
        serde_json::from_str(&contents).map_err(|source| NavCommandError::ParseFailed {
            path: path.display().to_string(),
            source,
        })?;

    info!(
        path = %path.display(),
        placeholders = task_file.len(),
        caret,
        action = direction.action_id(),
        "resolving placeholder navigation"
    );

    Ok(navigate(&task_file, caret, direction).ok())
}
