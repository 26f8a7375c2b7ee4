use log::{debug, trace};

use crate::{
    alignment::{Alignment, index_types::SiteIndex},
    color::ColorPolicy,
    error::SiteDecodeError,
    grid::{DisplayGrid, DisplayToken},
};

#[cfg(test)]
mod tests;

struct DecodedSites {
    /// One decoded per-taxon character string per site; `None` for sites that
    /// failed to decode.
    sites: Vec<Option<String>>,
    errors: Vec<SiteDecodeError>,
}

fn decode_sites(alignment: &impl Alignment) -> DecodedSites {
    let mut sites = Vec::with_capacity(alignment.site_count());
    let mut errors = Vec::new();

    for site in (0..alignment.site_count()).map(SiteIndex::from) {
        match alignment.decode_site(site) {
            Ok(decoded) => sites.push(Some(decoded)),
            Err(error) => {
                trace!("{error}");
                errors.push(error);
                sites.push(None);
            }
        }
    }

    DecodedSites { sites, errors }
}

/// The dominant character of one decoded site column.
///
/// Tallies are 256-slot ASCII-indexed and case-sensitive. The winner is the
/// first strict maximum found scanning in ascending code order, so ties
/// resolve to the lowest character code.
fn dominant_character(site_characters: &str) -> Option<char> {
    let mut counts = [0usize; 256];
    for character in site_characters.chars() {
        counts[character as usize] += 1;
    }

    let mut dominant = None;
    let mut dominant_count = 0;
    for (code, &count) in counts.iter().enumerate() {
        if count > dominant_count {
            dominant = Some(code as u8 as char);
            dominant_count = count;
        }
    }

    dominant
}

/// Computes the dominant character of every site, together with the decode
/// failures of the sites that have no dominant character.
pub fn compute_dominant_characters(
    alignment: &impl Alignment,
) -> (Vec<Option<char>>, Vec<SiteDecodeError>) {
    let DecodedSites { sites, errors } = decode_sites(alignment);
    let dominant_characters = sites
        .iter()
        .map(|site| site.as_deref().and_then(dominant_character))
        .collect();
    (dominant_characters, errors)
}

fn token_for(policy: &ColorPolicy, character: char, is_dominant: bool) -> DisplayToken {
    let glyph = if policy.use_dots && is_dominant {
        '.'
    } else {
        character
    };

    if policy.use_color {
        match policy.color_of(character) {
            Some(color) => DisplayToken::Colored { glyph, color },
            None => DisplayToken::Plain(glyph),
        }
    } else {
        DisplayToken::Plain(glyph)
    }
}

/// Builds the full display grid of an alignment under the given policy.
///
/// Cells matching their site's dominant character receive the dot token,
/// every other cell the distinct token; with `use_dots` disabled the two
/// coincide. Sites that fail to decode render blank across all taxa and are
/// reported in the grid's decode errors.
pub fn build_display_grid(alignment: &impl Alignment, policy: &ColorPolicy) -> DisplayGrid {
    debug!(
        "Building display grid for {} taxa over {} sites",
        alignment.taxon_count(),
        alignment.site_count()
    );

    let DecodedSites { sites, errors } = decode_sites(alignment);
    let dominant_characters: Vec<Option<char>> = sites
        .iter()
        .map(|site| site.as_deref().and_then(dominant_character))
        .collect();

    let mut rows =
        vec![Vec::with_capacity(alignment.site_count()); alignment.taxon_count()];
    for (site, decoded) in sites.iter().enumerate() {
        match decoded {
            Some(site_characters) => {
                for (row, character) in rows.iter_mut().zip(site_characters.chars()) {
                    let is_dominant = dominant_characters[site] == Some(character);
                    row.push(token_for(policy, character, is_dominant));
                }
            }
            None => {
                for row in &mut rows {
                    row.push(DisplayToken::Blank);
                }
            }
        }
    }

    DisplayGrid::new(
        alignment.taxon_names().to_vec(),
        dominant_characters,
        rows,
        errors,
    )
}
