//! Data model for extracted documentation — format-agnostic.

use crate::parser::comment::Category;

/// All documented declarations recovered from a single source file.
#[derive(Debug, Default)]
pub struct Document {
    /// File stem, e.g. `fits` for `src/fits.zig`
    pub module: String,
    pub declarations: Vec<DeclarationDoc>,
}

/// Whether a declaration body holds nested member declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeclKind {
    #[default]
    Function,
    /// `struct`, `union`, `enum` or `opaque` container
    Aggregate,
}

impl DeclKind {
    pub fn is_aggregate(self) -> bool {
        self == DeclKind::Aggregate
    }
}

/// Categorized doc-comment text, in source order per category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocText {
    pub description: Vec<String>,
    pub parameters: Vec<String>,
    pub returns: Vec<String>,
    pub errors: Vec<String>,
    pub examples: Vec<String>,
}

impl DocText {
    /// Append one line of content to the given category. Empty content is dropped.
    pub fn push(&mut self, category: Category, content: String) {
        if content.trim().is_empty() {
            return;
        }
        let target = match category {
            Category::Description => &mut self.description,
            Category::Parameters => &mut self.parameters,
            Category::Returns => &mut self.returns,
            Category::Errors => &mut self.errors,
            Category::Examples => &mut self.examples,
        };
        target.push(content);
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
            && self.parameters.is_empty()
            && self.returns.is_empty()
            && self.errors.is_empty()
            && self.examples.is_empty()
    }
}

/// A single documented exported declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeclarationDoc {
    pub name: String,
    pub kind: DeclKind,
    pub docs: DocText,
    /// Raw source lines of the declaration's own body. For aggregates, member
    /// bodies and member doc comments are excluded.
    pub code: Vec<String>,
    /// Nested members; only ever populated for [`DeclKind::Aggregate`].
    pub members: Vec<MemberBlock>,
}

/// A member declaration found inside an aggregate body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberBlock {
    /// Raw `///` lines immediately preceding the member
    pub docs: Vec<String>,
    /// Raw lines of the member's own balanced body
    pub code: Vec<String>,
}
