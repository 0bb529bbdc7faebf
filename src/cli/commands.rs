use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate, ValueCompleter};

#[derive(Parser, Debug)]
#[command(name = "mdsort")]
#[command(version)]
#[command(about = "Sort a markdown file alphabetically by its headings")]
#[command(
    long_about = "mdsort - Sort a markdown document by its heading hierarchy.\n\n\
    Headings are sorted case-insensitively at every level, each keeping the\n\
    content and subheadings it owns. Lines inside fenced code blocks are never\n\
    treated as headings.\n\n\
    Examples:\n  \
    mdsort notes.md                # Print sorted markdown\n  \
    mdsort notes.md -o sorted.md   # Write to a file\n  \
    mdsort -s notes.md             # Also sort lines within each section\n  \
    cat notes.md | mdsort -        # Read from stdin"
)]
pub struct Cli {
    /// Markdown file to sort, or '-' for stdin
    ///
    /// The file must be UTF-8 text; binary input is rejected.
    #[arg(add = markdown_file_completer())]
    pub input: PathBuf,

    /// Markdown file to create, otherwise write to stdout
    ///
    /// The file is replaced atomically once the sorted output is complete.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Sort the content between headings
    ///
    /// After sorting headings, sorts the lines inside each section
    /// case-insensitively and drops blank lines between them. Lines before
    /// the first heading are left alone.
    #[arg(short = 's', long = "sort")]
    pub sort: bool,

    /// Collapse sibling headings that share the same text
    ///
    /// The last heading wins and takes the position of the first; the
    /// content of the earlier headings is discarded. By default every
    /// heading is kept.
    #[arg(long = "merge-duplicates")]
    pub merge_duplicates: bool,

    /// Read settings from this config file instead of the default location
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(feature = "unstable-dynamic")]
fn markdown_file_completer() -> ArgValueCompleter {
    use std::ffi::OsStr;
    use std::path::Path;

    struct MarkdownCompleter;

    impl ValueCompleter for MarkdownCompleter {
        fn complete(&self, current: &OsStr) -> Vec<CompletionCandidate> {
            let input_str = current.to_string_lossy();
            let input_path = Path::new(input_str.as_ref());

            // Split "../docs/READ" into the directory to list and a name prefix
            let (search_dir, prefix) = if input_str.is_empty() {
                (Path::new("."), String::new())
            } else if input_str.ends_with('/') || input_str.ends_with('\\') {
                (input_path, String::new())
            } else {
                // parent() is Some("") for a bare file name
                let parent = input_path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                let prefix = input_path
                    .file_name()
                    .map(|s| s.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                (parent, prefix)
            };

            let Ok(entries) = std::fs::read_dir(search_dir) else {
                return vec![];
            };

            entries
                .filter_map(Result::ok)
                .filter_map(|entry| {
                    let path = entry.path();
                    let file_name = path.file_name()?.to_string_lossy().to_string();

                    if !file_name.to_lowercase().starts_with(&prefix) {
                        return None;
                    }

                    let value = if search_dir == Path::new(".") {
                        file_name
                    } else {
                        search_dir.join(&file_name).to_string_lossy().to_string()
                    };

                    if path.is_dir() {
                        let dir = if value.ends_with('/') {
                            value
                        } else {
                            format!("{value}/")
                        };
                        return Some(CompletionCandidate::new(dir).help(Some("directory".into())));
                    }

                    let ext = path.extension()?.to_string_lossy().to_lowercase();
                    (ext == "md" || ext == "markdown").then(|| CompletionCandidate::new(value))
                })
                .collect()
        }
    }

    ArgValueCompleter::new(MarkdownCompleter)
}

#[cfg(not(feature = "unstable-dynamic"))]
fn markdown_file_completer() -> clap::builder::ValueHint {
    clap::ValueHint::FilePath
}
