//! jsdoctor — generate namespace documentation from annotated JavaScript.
//!
//! Scans Closure-style sources (`goog.provide` + `/** ... */` doc comments)
//! and writes one page per declared namespace. Two modes:
//!
//! - **stdin mode**: `jsdoctor < file.js` prints every page to stdout
//! - **file mode**: `jsdoctor -o docs/api -f html src/*.js`

mod model;
mod render;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use jsdoctor_syntax::Source;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsdoctor",
    about = "Generate namespace documentation from annotated JavaScript source files"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory, one page per namespace. Prints to stdout if omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Include @private symbols in output
    #[arg(long)]
    show_private: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let renderer = render::create_renderer(&cli.format)?;

    let sources = if cli.files.is_empty() {
        vec![scan_stdin()?]
    } else {
        scan_files(&expand_globs(&cli.files)?)
    };

    let known = model::known_namespaces(&sources);
    let pages = model::assemble(&sources, cli.show_private)?;

    match cli.output {
        Some(ref output_dir) => {
            fs::create_dir_all(output_dir).with_context(|| {
                format!("failed to create output directory: {}", output_dir.display())
            })?;
            for page in &pages {
                let out_path = output_dir.join(format!("{}.{}", page.name, renderer.file_extension()));
                let output = renderer.render(page, &known)?;
                fs::write(&out_path, output)
                    .with_context(|| format!("failed to write {}", out_path.display()))?;
                info!(page = %page.name, path = %out_path.display(), "wrote page");
            }
        }
        None => print!("{}", renderer.render_all(&pages, &known)?),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// stdin mode: a malformed script is a hard error.
fn scan_stdin() -> Result<Source> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    jsdoctor_syntax::scan(&input, None).context("failed to scan stdin")
}

/// file mode: unreadable or malformed files are logged and skipped.
fn scan_files(paths: &[PathBuf]) -> Vec<Source> {
    let mut sources = Vec::new();
    for path in paths {
        let label = path.to_string_lossy();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping {}: {}", label, e);
                continue;
            }
        };
        match jsdoctor_syntax::scan(&content, Some(label.as_ref())) {
            Ok(source) => {
                info!(path = %label, symbols = source.symbol_count(), "scanned");
                sources.push(source);
            }
            Err(e) => warn!("skipping {}: {}", label, e),
        }
    }
    sources
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_supported(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
