//! Structural scan errors.

use thiserror::Error;

/// A declaration that runs past end of input without closing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unterminated {
    /// A brace opened by the declaration never closes
    #[error("block starting at line {} is never closed (depth {depth} at end of input)", .start + 1)]
    Braces {
        /// Zero-based index of the declaration line
        start: usize,
        /// Nesting depth left open when the input ran out
        depth: i32,
    },
    /// A declaration without a body never reaches its `;`
    #[error("declaration starting at line {} has no terminating `;` before end of input", .start + 1)]
    Statement { start: usize },
}

impl Unterminated {
    /// Zero-based index of the declaration line.
    pub fn start(&self) -> usize {
        match self {
            Unterminated::Braces { start, .. } | Unterminated::Statement { start } => *start,
        }
    }
}

/// Failure while scanning one source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unterminated block for `{name}` at line {line}: depth {depth} still open at end of file")]
    UnterminatedBlock {
        name: String,
        /// One-based line of the declaration
        line: usize,
        depth: i32,
    },

    #[error("missing `;` for `{name}` declared at line {line}")]
    MissingSemicolon { name: String, line: usize },
}

impl ScanError {
    pub fn unterminated(name: &str, err: Unterminated) -> Self {
        let name = name.to_string();
        match err {
            Unterminated::Braces { start, depth } => ScanError::UnterminatedBlock {
                name,
                line: start + 1,
                depth,
            },
            Unterminated::Statement { start } => ScanError::MissingSemicolon {
                name,
                line: start + 1,
            },
        }
    }
}
