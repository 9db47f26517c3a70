//! Declaration body collection by brace-depth counting.
//!
//! Depth is measured relative to the declaration line, so an aggregate's own
//! body sits at depth 1 and its members open at depth 2.

use super::comment::is_doc_comment;
use super::decl;
use super::lexer::LineShape;
use crate::error::Unterminated;
use crate::model::{DeclKind, MemberBlock};
use std::mem;

/// Depth at which an aggregate's member declarations start and end.
const MEMBER_DEPTH: i32 = 1;

/// A collected declaration body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: DeclKind,
    pub code: Vec<String>,
    pub members: Vec<MemberBlock>,
    /// Index of the last line belonging to the declaration
    pub end: usize,
}

/// Member currently being accumulated.
struct OpenMember {
    member: MemberBlock,
    /// The member has opened a brace of its own
    braced: bool,
}

/// Collect the declaration starting at `lines[start]`.
///
/// For aggregates, doc-commented nested declarations are split out into
/// [`MemberBlock`]s while the rest of the body stays in `code`. Returns
/// [`Unterminated`] if the input ends before the body closes.
pub fn collect<S: AsRef<str>>(lines: &[S], start: usize) -> Result<Block, Unterminated> {
    let kind = match lines.get(start) {
        Some(line) if decl::is_aggregate(line.as_ref()) => DeclKind::Aggregate,
        _ => DeclKind::Function,
    };

    let mut code: Vec<String> = Vec::new();
    let mut members: Vec<MemberBlock> = Vec::new();
    let mut docs: Vec<String> = Vec::new();
    let mut current: Option<OpenMember> = None;
    let mut depth: i32 = 0;
    let mut opened = false;

    for (index, raw) in lines.iter().enumerate().skip(start) {
        let line = raw.as_ref().trim_end();
        let shape = LineShape::of(line);

        let member_level =
            kind.is_aggregate() && index > start && current.is_none() && depth == MEMBER_DEPTH;
        if member_level {
            if is_doc_comment(line) {
                docs.push(line.to_string());
                continue;
            }
            if !docs.is_empty() && decl::recognize(line).is_some() {
                current = Some(OpenMember {
                    member: MemberBlock {
                        docs: mem::take(&mut docs),
                        code: Vec::new(),
                    },
                    braced: false,
                });
            } else if !docs.is_empty() && !line.trim().is_empty() {
                tracing::debug!(line = index + 1, "discarding doc comment not attached to a member");
                docs.clear();
            }
        }

        depth += shape.delta();
        opened |= shape.opens > 0;

        match current.as_mut() {
            Some(open) => {
                open.braced |= shape.opens > 0;
                open.member.code.push(line.to_string());
            }
            None => code.push(line.to_string()),
        }

        let finished = if opened {
            depth <= 0
        } else {
            shape.ends_statement
        };
        if finished {
            // Closing at the aggregate's own base never seals a trailing member.
            if let Some(open) = current.take() {
                tracing::debug!(line = index + 1, "member left open at end of aggregate");
                code.extend(open.member.code);
            }
            return Ok(Block {
                kind,
                code,
                members,
                end: index,
            });
        }

        let sealed = matches!(
            current,
            Some(ref open) if depth == MEMBER_DEPTH && (open.braced || shape.ends_statement)
        );
        if sealed {
            if let Some(open) = current.take() {
                members.push(open.member);
            }
        }
    }

    if opened {
        Err(Unterminated::Braces { start, depth })
    } else {
        Err(Unterminated::Statement { start })
    }
}
