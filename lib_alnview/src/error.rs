use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("the number of taxon names ({names}) does not match the number of sequence rows ({rows})")]
    TaxonCountMismatch { names: usize, rows: usize },

    #[error("taxon {taxon} has {actual} sites, but the first taxon has {expected}")]
    RaggedRow {
        taxon: String,
        actual: usize,
        expected: usize,
    },

    #[error("invalid colour string {0:?}, expected the form '#rrggbb'")]
    InvalidColor(String),
}

/// Decoding failure of a single site, collected while building a display grid.
///
/// The affected site is rendered blank, but never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode site {site}: {kind}")]
pub struct SiteDecodeError {
    pub site: usize,
    pub kind: SiteDecodeErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteDecodeErrorKind {
    #[error("pattern index {pattern} is out of bounds (pattern count: {pattern_count})")]
    PatternOutOfBounds { pattern: usize, pattern_count: usize },

    #[error("state code {code} is not part of the alphabet (alphabet size: {alphabet_size})")]
    UnknownStateCode { code: u32, alphabet_size: usize },

    #[error("decoded pattern has {actual} characters, but the alignment has {expected} taxa")]
    PatternLengthMismatch { actual: usize, expected: usize },

    #[error("decoded character {character:?} does not fit the 256-slot tally range")]
    NonTallyableCharacter { character: char },
}
