//! zigdoc — generate Markdown API reference pages from Zig `///` doc comments.
//!
//! Scans every `.zig` file in a source directory (skipping the C wrapper) and
//! writes one Starlight-ready page per file:
//!
//! `zigdoc src -o src/content/docs/reference`

mod error;
mod model;
mod parser;
mod render;
mod toc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use render::MarkdownRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "zigdoc",
    about = "Generate Markdown API reference pages from Zig doc comments"
)]
struct Cli {
    /// Directory containing the .zig sources (not searched recursively)
    #[arg(default_value = "src")]
    source: PathBuf,

    /// Output directory for the generated pages
    #[arg(short = 'o', long, default_value = "src/content/docs/reference")]
    output: PathBuf,

    /// C wrapper/integration file, always skipped
    #[arg(long, default_value = "wrapper.zig")]
    wrapper: String,

    /// Additional file names to skip. Can be specified multiple times.
    #[arg(short = 'x', long)]
    exclude: Vec<String>,

    /// Sidebar order written into every page header
    #[arg(long, default_value_t = 1)]
    order: u32,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;

    let mut skipped = cli.exclude.clone();
    skipped.push(cli.wrapper.clone());
    let files = discover(&cli.source, &skipped)?;
    let renderer = MarkdownRenderer {
        sidebar_order: cli.order,
    };

    let mut generated = 0usize;
    let mut failed = 0usize;
    for path in &files {
        match process_file(path, &cli.output, &renderer) {
            Ok(out_path) => {
                tracing::info!(
                    source = %path.display(),
                    output = %out_path.display(),
                    "generated documentation"
                );
                generated += 1;
            }
            Err(e) => {
                tracing::warn!(source = %path.display(), "skipping file: {:#}", e);
                failed += 1;
            }
        }
    }

    tracing::debug!(generated, failed, "batch complete");
    Ok(())
}

/// Set up stderr logging; `RUST_LOG` overrides the default `info` level.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// List the `.zig` files directly inside `source`, minus excluded names.
fn discover(source: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        bail!("source directory not found: {}", source.display());
    }

    let pattern = format!("{}/*.zig", glob::Pattern::escape(&source.to_string_lossy()));

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("unreadable entry: {}", e);
                continue;
            }
        };
        let excluded = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| exclude.iter().any(|x| x == name));
        if excluded {
            tracing::debug!(source = %path.display(), "excluded");
            continue;
        }
        if path.is_file() {
            files.push(path);
        }
    }

    // Sort for deterministic output
    files.sort();
    Ok(files)
}

/// Scan, render and write one source file. Nothing is written unless the
/// whole file scanned cleanly.
fn process_file(path: &Path, output_dir: &Path, renderer: &MarkdownRenderer) -> Result<PathBuf> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let module = module_name(path);
    let doc = parser::parse(&module, &content)
        .with_context(|| format!("failed to scan {}", path.display()))?;

    let out_path = output_dir.join(format!("{}.{}", module, renderer.file_extension()));
    fs::write(&out_path, renderer.render(&doc))
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(out_path)
}

/// Derive the module name from a source path.
/// "src/fits.zig" → "fits"
fn module_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn module_name_from_zig() {
        assert_eq!(module_name(Path::new("src/fits.zig")), "fits");
        assert_eq!(module_name(Path::new("image.zig")), "image");
    }

    #[test]
    fn module_name_no_extension() {
        assert_eq!(module_name(Path::new("build")), "build");
    }

    #[test]
    fn discover_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["table.zig", "fits.zig", "wrapper.zig", "notes.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = discover(dir.path(), &["wrapper.zig".to_string()]).unwrap();
        let names: Vec<String> = files.iter().map(|p| module_name(p)).collect();
        assert_eq!(names, vec!["fits", "table"]);
    }

    #[test]
    fn discover_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(discover(&dir.path().join("nope"), &[]).is_err());
    }

    #[test]
    fn process_file_writes_page() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let path = src.path().join("fits.zig");
        fs::write(&path, "/// Library version.\npub const version = \"0.1.0\";\n").unwrap();

        let renderer = MarkdownRenderer { sidebar_order: 1 };
        let written = process_file(&path, out.path(), &renderer).unwrap();
        assert_eq!(written, out.path().join("fits.md"));

        let page = fs::read_to_string(written).unwrap();
        assert!(page.contains("## version\n\nLibrary version."));
    }

    #[test]
    fn process_file_unterminated_writes_nothing() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let path = src.path().join("broken.zig");
        fs::write(&path, "pub fn broken() void {\n").unwrap();

        let renderer = MarkdownRenderer { sidebar_order: 1 };
        let err = process_file(&path, out.path(), &renderer).unwrap_err();
        assert!(format!("{:#}", err).contains("unterminated block for `broken`"));
        assert!(!out.path().join("broken.md").exists());
    }
}
