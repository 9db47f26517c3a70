//! Single-pass scanner turning Zig source into a [`Document`].

pub mod block;
pub mod comment;
pub mod decl;
pub mod lexer;

use crate::error::ScanError;
use crate::model::{DeclarationDoc, Document};
use comment::DocRun;

/// Scan a source file and collect every documented exported declaration.
///
/// Doc runs accumulate until an exported declaration consumes them. Any other
/// non-blank line discards the pending run. Declaration bodies are skipped as a
/// whole via the collector's returned end index.
pub fn parse(module: &str, source: &str) -> Result<Document, ScanError> {
    let lines: Vec<&str> = source.lines().collect();
    let mut declarations = Vec::new();
    let mut pending = DocRun::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];

        if comment::is_doc_comment(line) {
            pending = pending.absorb(line);
            cursor += 1;
            continue;
        }

        if let Some(decl) = decl::recognize(line) {
            let block = block::collect(&lines, cursor)
                .map_err(|err| ScanError::unterminated(&decl.name, err))?;
            tracing::debug!(
                name = %decl.name,
                form = ?decl.form,
                kind = ?block.kind,
                members = block.members.len(),
                "collected declaration"
            );

            declarations.push(DeclarationDoc {
                name: decl.name,
                kind: block.kind,
                docs: std::mem::take(&mut pending).into_text(),
                code: block.code,
                members: block.members,
            });
            cursor = block.end + 1;
            continue;
        }

        if !line.trim().is_empty() && !pending.is_empty() {
            tracing::debug!(line = cursor + 1, "doc comment not followed by an exported declaration");
            pending = DocRun::default();
        }
        cursor += 1;
    }

    Ok(Document {
        module: module.to_string(),
        declarations,
    })
}
