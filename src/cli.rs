//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::Parser;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("CLIPCLEAN_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CLIPCLEAN_BUILD_DATE"),
    ")"
);

/// Deduplicate an e-reader clippings export into one markdown section per book.
#[derive(Debug, Parser)]
#[command(
    name = "clipclean",
    version,
    long_version = LONG_VERSION,
    after_help = "Configuration is read from $CLIPCLEAN_CONFIG or <config dir>/clipclean/config.toml.\n\
                  Set CLIPCLEAN_LOG (e.g. CLIPCLEAN_LOG=debug) for diagnostic output."
)]
pub struct Cli {
    /// Clippings export to read [default: My Clippings.txt]
    pub input: Option<PathBuf>,

    /// Markdown file to write [default: Clipping_cleaned.md]
    pub output: Option<PathBuf>,
}
