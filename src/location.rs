use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// `Position` represents a 1-based line and 0-based column in a source file.
///
/// # Note
///
/// Line/column bases differ across the Solidity tooling ecosystem, for example:
///
/// - solc's own error output and most editors display 1-based line and column.
/// - Remix and the debugging stacks derived from it use 1-based line and
///   0-based column.
///
/// This crate follows the latter convention.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The position of offset 0 in any text.
    pub const fn start() -> Self {
        Self { line: 1, column: 0 }
    }

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<(u32, u32)> for Position {
    fn from((line, column): (u32, u32)) -> Self {
        Self::new(line, column)
    }
}

/// A contiguous span of original source text, with the owning file's name.
///
/// A range is only ever produced whole: both `start` and `end` were found in
/// the file's offset table, with `end` possibly sitting on the end-of-file
/// boundary.
#[derive(Clone, Eq, PartialEq, Serialize)]
pub struct SourceRange {
    pub file_name: String,
    pub start: Position,
    pub end: Position,
}

impl Debug for SourceRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{}-{}:{}",
            self.file_name, self.start.line, self.start.column, self.end.line, self.end.column,
        )
    }
}

impl SourceRange {
    pub fn new(file_name: String, start: Position, end: Position) -> Self {
        Self {
            file_name,
            start,
            end,
        }
    }
}
