//! Contents block entries for generated pages.

/// Sections every generated page links to, with their heading anchors.
pub const PAGE_SECTIONS: &[(&str, &str)] = &[
    ("Overview", "overview"),
    ("Types", "types"),
    ("Methods", "methods"),
];

/// Generate a contents list item linking to `anchor`.
pub fn render_toc_item(title: &str, anchor: &str) -> String {
    format!("- [{}](#{})", title, anchor)
}
