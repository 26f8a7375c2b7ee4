use std::path::{Path, PathBuf};

use alnview::show;
use anyhow::Result;
use clap::Parser;

// The working directory of the test binary is this crate, a.k.a.
// "[...]/alnview-tests"; test files live in the repo root.
pub fn repo_root_file(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crate has a parent directory")
        .join(relative)
}

pub fn run_show(args: &str) -> Result<()> {
    let cli = show::Cli::parse_from(args.split_whitespace());
    show::cli(cli)
}
