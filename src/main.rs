//! # mdsort
//!
//! Sort a markdown file alphabetically by its headings.
//!
//! ## Usage
//!
//! Print the sorted document:
//! ```sh
//! mdsort notes.md
//! ```
//!
//! Write to a file and sort lines within each section:
//! ```sh
//! mdsort -s notes.md -o sorted.md
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use color_eyre::Result;
use mdsort::input::InputSource;
use mdsort::output::OutputSink;
use mdsort::{Config, DuplicatePolicy, SortOptions};
use std::process;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = Cli::parse();
    init_logging(args.verbose);

    // Priority: CLI flags > config file > defaults
    let config = match args.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let options = sort_options(&args, &config);
    log::debug!("sort options: {:?}", options);

    let source = InputSource::from_arg(&args.input);
    let markdown = match source.read_to_string() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    let sorted = mdsort::finalize_output(mdsort::sort_markdown(&markdown, &options));

    OutputSink::from_arg(args.output.as_deref()).write(&sorted)?;
    Ok(())
}

fn sort_options(args: &Cli, config: &Config) -> SortOptions {
    SortOptions {
        sort_sections: args.sort || config.sort.sections,
        duplicates: if args.merge_duplicates {
            DuplicatePolicy::Merge
        } else {
            config.sort.duplicates
        },
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
