use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{Write, stdout},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use lib_alnview::{
    alignment::PatternAlignment,
    color::{ColorPolicy, Rgb},
    plain_text,
    transform::build_display_grid,
};
use log::{LevelFilter, info, warn};
use serde::Deserialize;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// Path to an alignment interchange toml file produced by an alignment
    /// loader.
    ///
    /// The file carries `taxa` and `sequences` arrays of equal length, and
    /// optionally a `[colors]` table mapping single characters to '#rrggbb'
    /// colours.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// Colour the characters via the letter colour wheel.
    #[clap(long, short = 'c')]
    color: bool,

    /// Show every character literally instead of compressing each site's
    /// dominant character to a dot.
    #[clap(long)]
    no_dots: bool,

    /// Additionally write the grid as an HTML table to this path.
    #[clap(long)]
    html: Option<PathBuf>,
}

#[derive(Deserialize)]
struct AlignmentFile {
    taxa: Vec<String>,
    sequences: Vec<String>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

pub fn cli(cli: Cli) -> Result<()> {
    TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    info!("Reading alignment toml file {:?}", cli.input);
    let buffer = fs::read_to_string(&cli.input).context("Error reading input file")?;
    let file: AlignmentFile = toml::from_str(&buffer).context("Error parsing input file")?;

    let custom_colors = parse_custom_colors(&file.colors)?;
    let alignment = PatternAlignment::from_rows(file.taxa, &file.sequences)?;
    let policy = ColorPolicy::new(cli.color, !cli.no_dots).with_custom_colors(custom_colors);

    let grid = build_display_grid(&alignment, &policy);
    for error in grid.decode_errors() {
        warn!("{error}");
    }

    plain_text::render(&grid, stdout())?;

    if let Some(html_path) = cli.html.as_ref() {
        info!("Writing html to {html_path:?}");
        let mut html = Vec::new();
        plain_text::render_html(&grid, &mut html)?;
        File::create(html_path)?.write_all(&html)?;
    }

    Ok(())
}

fn parse_custom_colors(colors: &BTreeMap<String, String>) -> Result<BTreeMap<char, Rgb>> {
    colors
        .iter()
        .map(|(key, value)| {
            let mut characters = key.chars();
            let (Some(character), None) = (characters.next(), characters.next()) else {
                bail!("Colour key {key:?} must be a single character");
            };
            Ok((character, value.parse::<Rgb>()?))
        })
        .collect()
}
