//! extdoc: render extension component metadata snapshots as documentation.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `extdoc < component.json` writes one document to stdout
//! - **file mode**: `extdoc -o docs/extensions components/*.json` writes one
//!   document per input, named after the component class

use anyhow::{Context, Result};
use clap::Parser;
use extdoc::{render_to_vec, DocumentRequest, Format, RenderOptions};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "extdoc",
    about = "Generate extension documentation from component metadata snapshots"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: xml (default), json
    #[arg(short = 'f', long, default_value = "xml")]
    format: Format,

    /// Pretty-print with N spaces of indentation
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Emit an XML declaration before the root element
    #[arg(long)]
    xml_declaration: bool,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.indent,
            xml_declaration: self.xml_declaration,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// stdin mode: read one snapshot from stdin, write the document to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let request = parse_request(&input).context("invalid component snapshot on stdin")?;
    let output = render_to_vec(cli.format, &request, &cli.render_options())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output).context("failed to write stdout")?;
    stdout.flush().context("failed to write stdout")?;
    Ok(())
}

/// file mode: render every input file into the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let options = cli.render_options();
    let ext = cli.format.file_extension();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let request = parse_request(&content)
            .with_context(|| format!("invalid component snapshot in {}", path.display()))?;

        // Render fully before touching the output file so a failure leaves nothing behind.
        let output = render_to_vec(cli.format, &request, &options)
            .with_context(|| format!("failed to render {}", path.display()))?;

        let name = derive_output_name(&request.component.class_name);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        if out_path.exists() {
            warn!(path = %out_path.display(), "overwriting existing document");
        }
        fs::write(&out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(source = %path.display(), output = %out_path.display(), "wrote document");
    }

    Ok(())
}

/// Accept either a full request (`{"component": ...}`) or a bare component snapshot.
fn parse_request(input: &str) -> Result<DocumentRequest> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let request = if value.get("component").is_some() {
        serde_json::from_value(value)?
    } else {
        debug!("input is a bare component snapshot");
        DocumentRequest::new(serde_json::from_value(value)?)
    };
    Ok(request)
}

/// Snapshot files are recognized by this extension when scanning directories.
const SNAPSHOT_EXTENSION: &str = "json";

/// Resolve positional arguments to snapshot files. Plain files are taken as
/// given, directories contribute their `*.json` entries (non-recursive), and
/// anything else is treated as a glob pattern. The result is sorted and free
/// of duplicates.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.insert(path.to_path_buf());
        } else if path.is_dir() {
            files.extend(snapshots_in(path)?);
        } else {
            let mut matched = 0usize;
            for entry in glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
                .flatten()
                .filter(|p| p.is_file())
            {
                files.insert(entry);
                matched += 1;
            }
            if matched == 0 {
                warn!(pattern = %pattern, "no files matched");
            }
        }
    }
    Ok(files.into_iter().collect())
}

fn snapshots_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && is_snapshot(p))
        .collect())
}

fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SNAPSHOT_EXTENSION)
}

/// Derive the output file name (without extension) from a component class name.
/// "org.x.FetchThing" → "org.x.FetchThing", "org.x.Outer$Inner" → "org.x.Outer_Inner"
fn derive_output_name(class_name: &str) -> String {
    let name: String = class_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() {
        "extension".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_keeps_class_name() {
        assert_eq!(derive_output_name("org.x.FetchThing"), "org.x.FetchThing");
    }

    #[test]
    fn output_name_replaces_unsafe_chars() {
        assert_eq!(derive_output_name("org.x.Outer$Inner"), "org.x.Outer_Inner");
        assert_eq!(derive_output_name("../etc/passwd"), ".._etc_passwd");
    }

    #[test]
    fn output_name_empty() {
        assert_eq!(derive_output_name(""), "extension");
    }

    #[test]
    fn expand_directory_keeps_only_snapshots() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let root = dir.path().to_str().unwrap().to_string();
        let explicit = dir.path().join("a.json").to_str().unwrap().to_string();
        let files = expand_globs(&[root, explicit]).unwrap();
        assert_eq!(
            files,
            [dir.path().join("a.json"), dir.path().join("b.json")]
        );
    }

    #[test]
    fn expand_glob_pattern() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("one.json"), "{}").unwrap();
        fs::write(dir.path().join("two.txt"), "").unwrap();

        let pattern = format!("{}/*", dir.path().display());
        let files = expand_globs(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(expand_globs(&[format!("{}/*.xml", dir.path().display())])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn parse_bare_component() {
        let request = parse_request(r#"{"className": "org.x.R", "type": "REPORTING_TASK"}"#).unwrap();
        assert_eq!(request.component.class_name, "org.x.R");
        assert!(request.provided_service_apis.is_empty());
    }

    #[test]
    fn parse_full_request() {
        let request = parse_request(
            r#"{
                "component": {"className": "org.x.S", "type": "CONTROLLER_SERVICE"},
                "providedServiceApis": [
                    {"className": "org.x.Api", "groupId": "g", "artifactId": "a", "version": "1"}
                ],
                "propertyServices": {}
            }"#,
        )
        .unwrap();
        assert_eq!(request.provided_service_apis.len(), 1);
    }
}
