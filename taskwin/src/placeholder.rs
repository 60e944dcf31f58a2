//! Answer placeholders and the task files that hold them.
//!
//! A task file in a study course marks out regions the student is expected to
//! fill in. Each region is an [`AnswerPlaceholder`]: a byte range plus an
//! optional hint. [`TaskFile`] keeps the placeholders sorted by offset and
//! non-overlapping, so a placeholder's position in the list doubles as its
//! navigation index.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// A fill-in region within a task file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPlaceholder {
    /// Byte offset of the region start.
    pub offset: usize,
    /// Byte length of the region.
    pub len: usize,
    /// Hint shown to the student for this region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl AnswerPlaceholder {
    pub fn new(offset: usize, len: usize) -> Self {
        Self {
            offset,
            len,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The placeholder's byte range, half-open.
    ///
    /// The end saturates at `usize::MAX`; [`TaskFile::new`] rejects
    /// placeholders whose end would overflow, so for validated placeholders
    /// the end is exact.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.len)
    }

    /// Whether the given caret offset falls inside this placeholder.
    ///
    /// A zero-length placeholder contains only a caret sitting exactly on its
    /// offset, so an empty region is still reachable by navigation.
    pub fn contains(&self, caret: usize) -> bool {
        // Subtractive compare: `offset + len` could overflow for an
        // unvalidated placeholder.
        match caret.checked_sub(self.offset) {
            Some(0) => true,
            Some(delta) => delta < self.len,
            None => false,
        }
    }
}

/// Errors from task file validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskFileError {
    /// Placeholders were not sorted by strictly increasing start offset.
    #[error("placeholder {index} starts at {offset}, at or before the previous placeholder")]
    UnorderedPlaceholders { index: usize, offset: usize },

    /// A placeholder starts inside the region of the one before it.
    #[error("placeholder {index} at {offset} overlaps the previous placeholder")]
    OverlappingPlaceholders { index: usize, offset: usize },

    /// A placeholder's end does not fit in the addressable range.
    #[error("placeholder {index} at {offset} extends past the addressable range")]
    EndOverflows { index: usize, offset: usize },
}

/// An ordered, non-overlapping set of answer placeholders.
///
/// Construction validates the invariants once, so lookups can binary search
/// and navigation can trust that list position equals index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AnswerPlaceholder>", into = "Vec<AnswerPlaceholder>")]
pub struct TaskFile {
    placeholders: Vec<AnswerPlaceholder>,
}

impl TaskFile {
    /// Build a task file from placeholders sorted by strictly increasing
    /// offset.
    ///
    /// Strict ordering keeps [`TaskFile::placeholder_at`] unambiguous: no two
    /// placeholders share a start offset, even zero-length ones.
    pub fn new(placeholders: Vec<AnswerPlaceholder>) -> Result<Self, TaskFileError> {
        for (index, p) in placeholders.iter().enumerate() {
            if p.offset.checked_add(p.len).is_none() {
                return Err(TaskFileError::EndOverflows {
                    index,
                    offset: p.offset,
                });
            }
        }
        for (index, pair) in placeholders.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let index = index + 1;
            if next.offset <= prev.offset {
                return Err(TaskFileError::UnorderedPlaceholders {
                    index,
                    offset: next.offset,
                });
            }
            // Ends were checked above, so this addition cannot overflow.
            if next.offset < prev.offset + prev.len {
                return Err(TaskFileError::OverlappingPlaceholders {
                    index,
                    offset: next.offset,
                });
            }
        }
        Ok(Self { placeholders })
    }

    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnswerPlaceholder> {
        self.placeholders.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnswerPlaceholder> {
        self.placeholders.iter()
    }

    /// Index of the placeholder containing the caret, if any.
    ///
    /// Binary searches the sorted start offsets, then checks the candidate's
    /// range. A caret between placeholders resolves to `None`.
    pub fn placeholder_at(&self, caret: usize) -> Option<usize> {
        let candidate = match self
            .placeholders
            .binary_search_by_key(&caret, |p| p.offset)
        {
            Ok(index) => index,
            Err(0) => return None,
            Err(insertion) => insertion - 1,
        };
        self.placeholders[candidate]
            .contains(caret)
            .then_some(candidate)
    }
}

impl TryFrom<Vec<AnswerPlaceholder>> for TaskFile {
    type Error = TaskFileError;

    fn try_from(placeholders: Vec<AnswerPlaceholder>) -> Result<Self, Self::Error> {
        Self::new(placeholders)
    }
}

impl From<TaskFile> for Vec<AnswerPlaceholder> {
    fn from(task_file: TaskFile) -> Self {
        task_file.placeholders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_file() -> TaskFile {
        TaskFile::new(vec![
            AnswerPlaceholder::new(4, 3),
            AnswerPlaceholder::new(10, 5).with_hint("use a loop"),
            AnswerPlaceholder::new(20, 0),
        ])
        .expect("valid placeholders")
    }

    #[test]
    fn contains_is_half_open() {
        let p = AnswerPlaceholder::new(4, 3);
        assert!(!p.contains(3));
        assert!(p.contains(4));
        assert!(p.contains(6));
        assert!(!p.contains(7));
    }

    #[test]
    fn zero_length_placeholder_contains_its_offset() {
        let p = AnswerPlaceholder::new(20, 0);
        assert!(p.contains(20));
        assert!(!p.contains(21));
    }

    #[test]
    fn placeholder_at_finds_containing_region() {
        let tf = task_file();
        assert_eq!(tf.placeholder_at(4), Some(0));
        assert_eq!(tf.placeholder_at(6), Some(0));
        assert_eq!(tf.placeholder_at(12), Some(1));
        assert_eq!(tf.placeholder_at(20), Some(2));
    }

    #[test]
    fn placeholder_at_misses_gaps_and_ends() {
        let tf = task_file();
        assert_eq!(tf.placeholder_at(0), None);
        assert_eq!(tf.placeholder_at(7), None);
        assert_eq!(tf.placeholder_at(9), None);
        assert_eq!(tf.placeholder_at(15), None);
        assert_eq!(tf.placeholder_at(100), None);
    }

    #[test]
    fn rejects_unordered_placeholders() {
        let err = TaskFile::new(vec![
            AnswerPlaceholder::new(10, 2),
            AnswerPlaceholder::new(4, 2),
        ])
        .expect_err("unordered");
        assert_eq!(
            err,
            TaskFileError::UnorderedPlaceholders {
                index: 1,
                offset: 4
            }
        );
    }

    #[test]
    fn rejects_overlapping_placeholders() {
        let err = TaskFile::new(vec![
            AnswerPlaceholder::new(4, 5),
            AnswerPlaceholder::new(7, 2),
        ])
        .expect_err("overlapping");
        assert_eq!(
            err,
            TaskFileError::OverlappingPlaceholders {
                index: 1,
                offset: 7
            }
        );
    }

    #[test]
    fn rejects_end_past_addressable_range() {
        let err = TaskFile::new(vec![
            AnswerPlaceholder::new(10, usize::MAX),
            AnswerPlaceholder::new(20, 0),
        ])
        .expect_err("end overflows");
        assert_eq!(
            err,
            TaskFileError::EndOverflows {
                index: 0,
                offset: 10
            }
        );
    }

    #[test]
    fn contains_handles_unvalidated_huge_length() {
        let p = AnswerPlaceholder::new(10, usize::MAX);
        assert!(p.contains(10));
        assert!(p.contains(11));
        assert!(p.contains(usize::MAX));
        assert!(!p.contains(9));
    }

    #[test]
    fn range_saturates_for_unvalidated_huge_length() {
        let p = AnswerPlaceholder::new(10, usize::MAX);
        assert_eq!(p.range(), 10..usize::MAX);
    }

    #[test]
    fn rejects_duplicate_start_offsets() {
        let err = TaskFile::new(vec![
            AnswerPlaceholder::new(7, 0),
            AnswerPlaceholder::new(7, 2),
        ])
        .expect_err("duplicate offsets");
        assert_eq!(
            err,
            TaskFileError::UnorderedPlaceholders {
                index: 1,
                offset: 7
            }
        );
    }

    #[test]
    fn adjacent_placeholders_are_allowed() {
        let tf = TaskFile::new(vec![
            AnswerPlaceholder::new(4, 3),
            AnswerPlaceholder::new(7, 2),
        ])
        .expect("adjacent regions do not overlap");
        assert_eq!(tf.placeholder_at(6), Some(0));
        assert_eq!(tf.placeholder_at(7), Some(1));
    }

    #[test]
    fn serde_rejects_invalid_lists() {
        let json = r#"[{"offset": 10, "len": 2}, {"offset": 4, "len": 2}]"#;
        let result: Result<TaskFile, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_round_trips() {
        let tf = task_file();
        let json = serde_json::to_string(&tf).expect("serialize");
        let back: TaskFile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tf);
    }
}
