//! Starlight-flavored markdown renderer.
//!
//! Functions and plain constants use a flat layout. Aggregates use a decorated
//! layout with a `Definition` block and one subsection per member.

use crate::model::*;
use crate::parser::decl;
use crate::render::page;

/// Separator line between consecutive members of an aggregate.
pub const MEMBER_SEPARATOR: &str = "──────────────────────────────────────────────────";

pub struct MarkdownRenderer {
    /// `sidebar.order` written into every page header
    pub sidebar_order: u32,
}

impl MarkdownRenderer {
    /// Render a complete page: header, contents block, then every declaration.
    pub fn render(&self, doc: &Document) -> String {
        let body: String = doc
            .declarations
            .iter()
            .map(render_declaration)
            .collect();
        page::wrap(&doc.module, self.sidebar_order, &body)
    }

    pub fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render one declaration's documentation block.
pub fn render_declaration(decl: &DeclarationDoc) -> String {
    match decl.kind {
        DeclKind::Function => render_function(decl),
        DeclKind::Aggregate => render_aggregate(decl),
    }
}

fn render_function(decl: &DeclarationDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", decl.name));
    push_description(&mut lines, &decl.docs);
    push_code(&mut lines, &decl.code);
    push_sections(&mut lines, &decl.docs, "###");
    lines.push("---\n".to_string());

    join(lines)
}

fn render_aggregate(decl: &DeclarationDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", decl.name));
    lines.push(format!("{}\n", "━".repeat(decl.name.chars().count() + 3)));
    push_description(&mut lines, &decl.docs);

    lines.push("### Definition\n".to_string());
    push_code(&mut lines, &decl.code);
    push_sections(&mut lines, &decl.docs, "###");

    if !decl.members.is_empty() {
        lines.push("## Methods".to_string());
        lines.push(format!("{}\n", "━".repeat(8)));

        for (index, member) in decl.members.iter().enumerate() {
            if index > 0 {
                lines.push(format!("{}\n", MEMBER_SEPARATOR));
            }
            render_member(&mut lines, member);
        }
    }

    lines.push("---\n".to_string());
    join(lines)
}

/// Render one member, re-classifying its raw doc lines.
fn render_member(lines: &mut Vec<String>, member: &MemberBlock) {
    let docs = DocText::from_lines(&member.docs);
    let name = member
        .code
        .first()
        .and_then(|line| decl::recognize(line))
        .map(|d| d.name)
        .unwrap_or_default();

    lines.push(format!("### {}\n", name));
    push_description(lines, &docs);

    lines.push("#### Signature\n".to_string());
    push_code(lines, &member.code);
    push_sections(lines, &docs, "####");
}

fn push_description(lines: &mut Vec<String>, docs: &DocText) {
    if !docs.description.is_empty() {
        lines.push(docs.description.join("\n"));
        lines.push(String::new());
    }
}

fn push_code(lines: &mut Vec<String>, code: &[String]) {
    lines.push("```zig".to_string());
    lines.push(tidy_code(code));
    lines.push("```".to_string());
    lines.push(String::new());
}

/// Parameters, returns, errors and examples; empty sections are omitted.
fn push_sections(lines: &mut Vec<String>, docs: &DocText, level: &str) {
    if !docs.parameters.is_empty() {
        push_list(lines, level, "Parameters", &docs.parameters);
    }

    if !docs.returns.is_empty() {
        lines.push(format!("{} Returns\n", level));
        lines.push(docs.returns.join("\n"));
        lines.push(String::new());
    }

    if !docs.errors.is_empty() {
        push_list(lines, level, "Errors", &docs.errors);
    }

    if !docs.examples.is_empty() {
        lines.push(format!("{} Examples\n", level));
        lines.push("```zig".to_string());
        lines.push(unindent(&docs.examples));
        lines.push("```".to_string());
        lines.push(String::new());
    }
}

fn push_list(lines: &mut Vec<String>, level: &str, title: &str, items: &[String]) {
    lines.push(format!("{} {}\n", level, title));
    for item in items {
        // Authors often write their own "- " bullets
        let item = item.strip_prefix("- ").unwrap_or(item);
        lines.push(format!("- {}", item));
    }
    lines.push(String::new());
}

fn join(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Trim trailing whitespace per line and collapse runs of blank lines into one.
/// Leading and trailing blank lines are dropped.
fn tidy_code(code: &[String]) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(code.len());
    for line in code.iter().map(|l| l.trim_end()) {
        if line.is_empty() && out.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last() == Some(&"") {
        out.pop();
    }
    out.join("\n")
}

/// Remove common leading indentation from example lines.
fn unindent(lines: &[String]) -> String {
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| l.get(min_indent..).unwrap_or(l.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn count_lines(output: &str, pred: impl Fn(&str) -> bool) -> usize {
        output.lines().filter(|l| pred(l)).count()
    }

    #[test]
    fn function_with_params_and_returns() {
        let source = "/// Open a FITS file.\n/// Parameters:\n/// path: file to open\n/// Returns:\n/// A file handle\npub fn open(path: []const u8) !FitsFile {\n    return FitsFile.init(path);\n}\n";
        let doc = parser::parse("fits", source).unwrap();
        let output = render_declaration(&doc.declarations[0]);

        assert_eq!(count_lines(&output, |l| l.starts_with("## ")), 1);
        assert_eq!(count_lines(&output, |l| l.starts_with("```zig")), 1);
        assert_eq!(count_lines(&output, |l| l.starts_with("- ")), 1);
        assert!(output.contains("- path: file to open"));
        assert!(output.contains("### Returns\n\nA file handle\n"));
        assert!(output.starts_with("## open\n\nOpen a FITS file.\n\n```zig\n"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let decl = DeclarationDoc {
            name: "close".to_string(),
            code: strings(&["pub fn close() void {}"]),
            ..Default::default()
        };
        let output = render_declaration(&decl);
        assert!(!output.contains("Errors"));
        assert!(!output.contains("Parameters"));
        assert!(!output.contains("Returns"));
        assert!(!output.contains("Examples"));
        assert_eq!(output, "## close\n\n```zig\npub fn close() void {}\n```\n\n---\n\n");
    }

    #[test]
    fn errors_list_and_examples_block() {
        let decl = DeclarationDoc {
            name: "read".to_string(),
            docs: DocText {
                errors: strings(&["- EndOfStream", "OutOfMemory"]),
                examples: strings(&["    const n = try read(buf);", "    _ = n;"]),
                ..Default::default()
            },
            code: strings(&["pub fn read(buf: []u8) !usize {", "}"]),
            ..Default::default()
        };
        let output = render_declaration(&decl);
        assert!(output.contains("### Errors\n\n- EndOfStream\n- OutOfMemory\n"));
        assert!(output.contains("### Examples\n\n```zig\nconst n = try read(buf);\n_ = n;\n```"));
    }

    #[test]
    fn aggregate_members_in_order_with_one_separator() {
        let source = r#"/// A FITS image HDU.
pub const Image = struct {
    width: usize,

    /// Pixel count.
    /// Parameters:
    /// self: the image
    /// Returns:
    /// width times height
    pub fn len(self: Image) usize {
        return self.width;
    }

    /// Read pixels.
    /// Errors:
    /// ReadFailed
    pub fn read(self: *Image) ![]f32 {
        return error.ReadFailed;
    }
};
"#;
        let doc = parser::parse("image", source).unwrap();
        let output = render_declaration(&doc.declarations[0]);

        let len_at = output.find("### len\n").unwrap();
        let read_at = output.find("### read\n").unwrap();
        assert!(len_at < read_at);
        assert_eq!(output.matches(MEMBER_SEPARATOR).count(), 1);
        let sep_at = output.find(MEMBER_SEPARATOR).unwrap();
        assert!(len_at < sep_at && sep_at < read_at);

        let (first, second) = output.split_at(sep_at);
        assert!(first.contains("#### Parameters\n\n- self: the image"));
        assert!(first.contains("#### Returns\n\nwidth times height"));
        assert!(!first.contains("#### Errors"));
        assert!(second.contains("#### Errors\n\n- ReadFailed"));
        assert!(!second.contains("#### Parameters"));

        assert!(output.starts_with("## Image\n\n━━━━━━━━\n\nA FITS image HDU.\n\n### Definition\n"));
        assert!(output.contains("## Methods\n━━━━━━━━\n"));
    }

    #[test]
    fn aggregate_without_members_has_no_methods_heading() {
        let source = "pub const Mode = enum {\n    read,\n    write,\n};\n";
        let doc = parser::parse("mode", source).unwrap();
        let output = render_declaration(&doc.declarations[0]);
        assert!(output.contains("### Definition"));
        assert!(!output.contains("## Methods"));
    }

    #[test]
    fn tidy_code_collapses_blank_runs() {
        let code = strings(&["", "pub const A = struct {   ", "    x: u8,", "", "", "", "    y: u8,", "};", ""]);
        assert_eq!(
            tidy_code(&code),
            "pub const A = struct {\n    x: u8,\n\n    y: u8,\n};"
        );
    }

    #[test]
    fn unindent_common_prefix() {
        assert_eq!(unindent(&strings(&["  a", "    b", "  c"])), "a\n  b\nc");
    }

    #[test]
    fn render_page_includes_header() {
        let renderer = MarkdownRenderer { sidebar_order: 1 };
        let doc = parser::parse("fits", "/// Version string.\npub const version = \"1.0\";\n").unwrap();
        let output = renderer.render(&doc);
        assert!(output.starts_with("---\ntitle: fits\n"));
        assert!(output.contains("## version\n\nVersion string.\n"));
        assert_eq!(renderer.file_extension(), "md");
    }
}
