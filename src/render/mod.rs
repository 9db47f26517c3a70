//! Renderer module — markdown pages for the documentation site.

pub mod markdown;
pub mod page;

pub use markdown::MarkdownRenderer;
