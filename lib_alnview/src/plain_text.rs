use std::io::Write;

use log::debug;

use crate::{grid::DisplayGrid, ruler::ruler_labels};


/// Renders the grid as plain text: the site ruler, the dominant-character
/// line, then one name-prefixed row per taxon, all padded to a common name
/// width.
pub fn render(grid: &DisplayGrid, mut output: impl Write) -> Result<(), std::io::Error> {
    debug!(
        "Rendering {}x{} grid as plain text",
        grid.taxon_count(),
        grid.site_count()
    );

    let max_name_len = grid
        .taxon_names()
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    let indent: String = " ".repeat(max_name_len + 2);

    write!(output, "{indent}")?;
    for label in ruler_labels(grid.site_count()) {
        write!(output, "{label}")?;
    }
    writeln!(output)?;

    write!(output, "{indent}")?;
    for dominant in grid.dominant_characters() {
        write!(output, "{}", dominant.unwrap_or(' '))?;
    }
    writeln!(output)?;

    for (name, row) in grid.taxon_names().iter().zip(grid.rows()) {
        write!(output, "{name}: ")?;
        for _ in name.chars().count()..max_name_len {
            write!(output, " ")?;
        }
        for token in row {
            write!(output, "{}", token.glyph())?;
        }
        writeln!(output)?;
    }

    Ok(())
}

/// Renders the grid as a minimal HTML table, with each coloured cell in the
/// legacy font-tag shape.
pub fn render_html(grid: &DisplayGrid, mut output: impl Write) -> Result<(), std::io::Error> {
    debug!(
        "Rendering {}x{} grid as html",
        grid.taxon_count(),
        grid.site_count()
    );

    writeln!(
        output,
        "<html><body><table style=\"font-family: monospace;\">"
    )?;

    write!(output, "<tr><th><br>taxon name</th>")?;
    for (label, dominant) in ruler_labels(grid.site_count())
        .into_iter()
        .zip(grid.dominant_characters())
    {
        write!(output, "<th>{label}<br>{}</th>", dominant.unwrap_or(' '))?;
    }
    writeln!(output, "</tr>")?;

    for (name, row) in grid.taxon_names().iter().zip(grid.rows()) {
        write!(output, "<tr><td>{name}</td>")?;
        for token in row {
            write!(output, "<td>{}</td>", token.to_html())?;
        }
        writeln!(output, "</tr>")?;
    }

    writeln!(output, "</table></body></html>")?;

    Ok(())
}
