//! `///` doc comment classifier.
//!
//! A doc run is a flat sequence of comment lines where tag lines such as
//! `/// Parameters:` switch the active category for every following line until
//! the next tag. The category state is threaded explicitly through [`step`].

use crate::model::DocText;
use regex::Regex;
use std::sync::LazyLock;

static RE_DOC_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:space:]]*///(?:[^/]|$)").unwrap());

static RE_STRIP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:space:]]*/// ?").unwrap());

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(parameters|returns|errors|examples?)[[:blank:]]*:").unwrap()
});

/// Documentation category a comment line contributes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Description,
    Parameters,
    Returns,
    Errors,
    Examples,
}

/// Result of classifying a single comment line in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Tag line — opens a new category, carries no text
    Tag(Category),
    /// Content for whichever category is active; may be empty
    Content(String),
}

/// True for `///` lines. `////` is an ordinary comment in Zig.
pub fn is_doc_comment(line: &str) -> bool {
    RE_DOC_MARKER.is_match(line)
}

/// Classify one doc-comment line.
pub fn classify(line: &str) -> Classified {
    let body = RE_STRIP_MARKER.replace(line, "");
    let body = body.trim_end();
    let trimmed = body.trim_start();

    if let Some(caps) = RE_TAG.captures(trimmed) {
        let category = match caps[1].to_ascii_lowercase().as_str() {
            "parameters" => Category::Parameters,
            "returns" => Category::Returns,
            "errors" => Category::Errors,
            _ => Category::Examples,
        };
        return Classified::Tag(category);
    }

    Classified::Content(body.to_string())
}

/// Reducer over a doc run: `(active, line) → (active', emission)`.
///
/// Tag lines change the active category and emit nothing. Content lines emit
/// `(active, text)` and leave the category unchanged; blank content emits
/// nothing. Example text keeps its indentation, everything else is trimmed.
pub fn step(active: Category, line: &str) -> (Category, Option<(Category, String)>) {
    match classify(line) {
        Classified::Tag(next) => (next, None),
        Classified::Content(text) if text.trim().is_empty() => (active, None),
        Classified::Content(text) => {
            let text = if active == Category::Examples {
                text
            } else {
                text.trim().to_string()
            };
            (active, Some((active, text)))
        }
    }
}

/// Accumulating state of a pending doc run.
#[derive(Debug, Default, Clone)]
pub struct DocRun {
    active: Category,
    text: DocText,
}

impl DocRun {
    /// Fold one comment line into the run.
    pub fn absorb(self, line: &str) -> Self {
        let DocRun { active, mut text } = self;
        let (active, emission) = step(active, line);
        if let Some((category, content)) = emission {
            text.push(category, content);
        }
        DocRun { active, text }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> DocText {
        self.text
    }
}

impl DocText {
    /// Classify a whole run of raw comment lines, starting in `Description`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> DocText {
        lines
            .iter()
            .fold(DocRun::default(), |run, line| run.absorb(line.as_ref()))
            .into_text()
    }
}
