//! Per-file page wrapper: Starlight frontmatter, module title and contents block.

use crate::toc;

/// Wrap a rendered body in the page header for `module`.
pub fn wrap(module: &str, sidebar_order: u32, body: &str) -> String {
    let mut out = frontmatter(module, sidebar_order);

    out.push_str(&format!("# {}\n", module));
    out.push_str(&"═".repeat(module.chars().count()));
    out.push_str("\n\n");

    out.push_str(&contents());

    out.push_str("## Overview\n");
    out.push_str(&"━".repeat(9));
    out.push_str("\n\n");
    out.push_str(body);
    out
}

fn frontmatter(module: &str, sidebar_order: u32) -> String {
    format!(
        "---\ntitle: {module}\ndescription: API documentation for {module}\nsidebar:\n    order: {sidebar_order}\n---\n\n"
    )
}

/// Static contents block linking the fixed page sections.
fn contents() -> String {
    let mut out = String::from("## Contents\n");
    out.push_str(&"━".repeat(9));
    out.push_str("\n\n");
    for (title, anchor) in toc::PAGE_SECTIONS {
        out.push_str(&toc::render_toc_item(title, anchor));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&"─".repeat(50));
    out.push_str("\n\n");
    out
}
