//! Parser error types for wt-parser.

use std::path::PathBuf;

use wt_core::MemberList;

/// Structural failures inside a single parsed module.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A member list element is not an object literal.
    #[error("element {index} of `{list}` is a `{kind}`, expected an object literal")]
    MalformedElement {
        list: MemberList,
        index: usize,
        kind: String,
    },
}

/// Errors that can occur while scanning source files.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {}: syntax error at line {line}", .path.display())]
    ParseFailed { path: PathBuf, line: usize },

    #[error("Malformed component declaration in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("IO error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParserError {
    /// Whether the failure is confined to one file, so the rest of a batch
    /// can still be scanned.
    #[must_use]
    pub const fn is_file_local(&self) -> bool {
        matches!(self, Self::ParseFailed { .. } | Self::Malformed { .. })
    }

    /// The file the error belongs to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ParseFailed { path, .. } | Self::Malformed { path, .. } | Self::Io { path, .. } => {
                path
            }
        }
    }
}
