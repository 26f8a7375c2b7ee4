use crate::{
    alignment::index_types::{SiteIndex, TaxonIndex},
    color::Rgb,
    error::SiteDecodeError,
};


/// The display token of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayToken {
    /// Cell of a site that failed to decode.
    Blank,

    Plain(char),

    Colored { glyph: char, color: Rgb },
}

impl DisplayToken {
    pub fn glyph(&self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Plain(glyph) | Self::Colored { glyph, .. } => *glyph,
        }
    }

    pub fn color(&self) -> Option<Rgb> {
        match self {
            Self::Blank | Self::Plain(_) => None,
            Self::Colored { color, .. } => Some(*color),
        }
    }

    /// The HTML-like markup fragment of this token, in the shape legacy
    /// palette consumers expect.
    pub fn to_html(&self) -> String {
        match self {
            Self::Blank => " ".to_string(),
            Self::Plain(glyph) => glyph.to_string(),
            Self::Colored { glyph, color } => {
                format!("<font color='{color}'><b>{glyph}</b></font>")
            }
        }
    }
}

/// The fully computed view of an alignment: a taxa × sites token matrix with a
/// taxon-name header column and a dominant-character header row.
///
/// A grid is rebuilt in full whenever the colour policy changes and is owned
/// exclusively by the presentation layer that requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGrid {
    taxon_names: Vec<String>,
    dominant_characters: Vec<Option<char>>,
    rows: Vec<Vec<DisplayToken>>,
    decode_errors: Vec<SiteDecodeError>,
}

impl DisplayGrid {
    pub(crate) fn new(
        taxon_names: Vec<String>,
        dominant_characters: Vec<Option<char>>,
        rows: Vec<Vec<DisplayToken>>,
        decode_errors: Vec<SiteDecodeError>,
    ) -> Self {
        debug_assert_eq!(taxon_names.len(), rows.len());
        debug_assert!(
            rows.iter()
                .all(|row| row.len() == dominant_characters.len())
        );

        Self {
            taxon_names,
            dominant_characters,
            rows,
            decode_errors,
        }
    }

    pub fn taxon_names(&self) -> &[String] {
        &self.taxon_names
    }

    pub fn taxon_count(&self) -> usize {
        self.taxon_names.len()
    }

    pub fn site_count(&self) -> usize {
        self.dominant_characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxon_count() == 0 || self.site_count() == 0
    }

    /// The dominant character per site; `None` for sites that failed to
    /// decode.
    pub fn dominant_characters(&self) -> &[Option<char>] {
        &self.dominant_characters
    }

    pub fn dominant_character(&self, site: SiteIndex) -> Option<char> {
        self.dominant_characters[site.primitive()]
    }

    pub fn rows(&self) -> &[Vec<DisplayToken>] {
        &self.rows
    }

    pub fn row(&self, taxon: TaxonIndex) -> &[DisplayToken] {
        &self.rows[taxon.primitive()]
    }

    pub fn cell(&self, taxon: TaxonIndex, site: SiteIndex) -> DisplayToken {
        self.rows[taxon.primitive()][site.primitive()]
    }

    /// Per-site decode failures collected while building the grid.
    pub fn decode_errors(&self) -> &[SiteDecodeError] {
        &self.decode_errors
    }
}
