//! Exported declaration recognition.
//!
//! Declarations are recognized by surface patterns on a single line. Each
//! supported form is one entry in [`DECL_FORMS`]; the block collector only ever
//! asks [`recognize`] and [`is_aggregate`].

use regex::Regex;
use std::sync::LazyLock;

/// Syntactic form a declaration was recognized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclForm {
    /// `pub const Name = ...`
    ConstAssign,
    /// `pub fn name(`, `pub inline fn`, `pub extern "c" fn`, ...
    Function,
    /// `pub const name: T ...` / `pub var name ...`
    Binding,
}

/// An exported declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub form: DeclForm,
}

// Tried in order; the constant-assignment form wins over the plain binding form.
static DECL_FORMS: LazyLock<Vec<(DeclForm, Regex)>> = LazyLock::new(|| {
    vec![
        (
            DeclForm::ConstAssign,
            Regex::new(r"^[[:space:]]*pub\s+const\s+(\w+)\s*=").unwrap(),
        ),
        (
            DeclForm::Function,
            Regex::new(
                r#"^[[:space:]]*pub\s+(?:(?:inline|noinline|export|extern(?:\s+"\w+")?)\s+)*fn\s+(\w+)"#,
            )
            .unwrap(),
        ),
        (
            DeclForm::Binding,
            Regex::new(r"^[[:space:]]*pub\s+(?:const|var)\s+(\w+)").unwrap(),
        ),
    ]
});

static RE_AGGREGATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=\s*(?:(?:extern|packed)\s+)?(?:struct|union|enum|opaque)\b").unwrap()
});

/// Recognize an exported declaration and extract its identifier.
pub fn recognize(line: &str) -> Option<Declaration> {
    DECL_FORMS.iter().find_map(|(form, re)| {
        re.captures(line).map(|caps| Declaration {
            name: caps[1].to_string(),
            form: *form,
        })
    })
}

/// True when the declaration line introduces a container type.
pub fn is_aggregate(line: &str) -> bool {
    RE_AGGREGATE.is_match(line)
}
