use std::collections::HashMap;

use itertools::Itertools;
use tagged_vec::TaggedVec;

use crate::error::{Error, Result, SiteDecodeError, SiteDecodeErrorKind};

use index_types::{PatternIdentifier, SiteIndex};

pub mod index_types;


/// A state code of a single taxon at a single site, resolved through the
/// alignment's alphabet when decoding.
pub type StateCode = u32;

/// Read-only view of a pattern-compressed multiple-sequence alignment.
///
/// Equal site columns are stored once in a pattern table; each site resolves
/// through [`Alignment::pattern_index`] to its pattern.
pub trait Alignment {
    fn site_count(&self) -> usize;

    fn taxon_count(&self) -> usize;

    fn taxon_names(&self) -> &[String];

    fn pattern_count(&self) -> usize;

    /// The pattern table entry backing the given site.
    fn pattern_index(&self, site: SiteIndex) -> PatternIdentifier;

    /// The per-taxon state codes of a pattern, or `None` if the identifier is
    /// out of bounds.
    fn pattern(&self, pattern: PatternIdentifier) -> Option<&[StateCode]>;

    /// Decodes state codes into one character per taxon, in taxon order.
    fn states_to_string(
        &self,
        states: &[StateCode],
    ) -> std::result::Result<String, SiteDecodeErrorKind>;

    /// Resolves and decodes a single site into one character per taxon.
    ///
    /// Classifies every failure mode instead of swallowing it: out-of-bounds
    /// patterns, unknown state codes, length mismatches and characters that
    /// cannot be tallied in a 256-slot table.
    fn decode_site(&self, site: SiteIndex) -> std::result::Result<String, SiteDecodeError> {
        let site_decode_error = |kind| SiteDecodeError {
            site: site.primitive(),
            kind,
        };

        let pattern = self.pattern_index(site);
        let states = self
            .pattern(pattern)
            .ok_or_else(|| {
                site_decode_error(SiteDecodeErrorKind::PatternOutOfBounds {
                    pattern: pattern.primitive(),
                    pattern_count: self.pattern_count(),
                })
            })?;
        let decoded = self.states_to_string(states).map_err(site_decode_error)?;

        let character_count = decoded.chars().count();
        if character_count != self.taxon_count() {
            return Err(site_decode_error(SiteDecodeErrorKind::PatternLengthMismatch {
                actual: character_count,
                expected: self.taxon_count(),
            }));
        }
        if let Some(character) = decoded.chars().find(|&character| character as u32 >= 256) {
            return Err(site_decode_error(SiteDecodeErrorKind::NonTallyableCharacter {
                character,
            }));
        }

        Ok(decoded)
    }
}

/// Pattern-compressed alignment over an explicit character alphabet.
///
/// This is the concrete implementation used by the CLI and the tests; an
/// alignment loader may provide its own [`Alignment`] instead.
#[derive(Debug)]
pub struct PatternAlignment {
    taxon_names: Vec<String>,
    site_patterns: TaggedVec<SiteIndex, PatternIdentifier>,
    patterns: TaggedVec<PatternIdentifier, Vec<StateCode>>,
    alphabet: Vec<char>,
}

impl PatternAlignment {
    /// Compresses raw per-taxon sequence rows into a pattern table.
    ///
    /// Equal site columns share a pattern; patterns and the alphabet are kept
    /// in first-occurrence order.
    pub fn from_rows(taxon_names: Vec<String>, rows: &[impl AsRef<str>]) -> Result<Self> {
        if taxon_names.len() != rows.len() {
            return Err(Error::TaxonCountMismatch {
                names: taxon_names.len(),
                rows: rows.len(),
            });
        }

        let site_count = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0);
        for (name, row) in taxon_names.iter().zip(rows) {
            let length = row.as_ref().chars().count();
            if length != site_count {
                return Err(Error::RaggedRow {
                    taxon: name.clone(),
                    actual: length,
                    expected: site_count,
                });
            }
        }

        let alphabet: Vec<char> = rows
            .iter()
            .flat_map(|row| row.as_ref().chars())
            .unique()
            .collect();
        let encoding: HashMap<char, StateCode> = alphabet
            .iter()
            .enumerate()
            .map(|(code, &character)| (character, code as StateCode))
            .collect();
        let row_characters: Vec<Vec<char>> =
            rows.iter().map(|row| row.as_ref().chars().collect()).collect();

        let mut patterns = TaggedVec::<PatternIdentifier, Vec<StateCode>>::default();
        let mut pattern_identifiers = HashMap::<Vec<StateCode>, PatternIdentifier>::new();
        let mut site_patterns = TaggedVec::<SiteIndex, PatternIdentifier>::default();
        for site in 0..site_count {
            let column: Vec<StateCode> = row_characters
                .iter()
                .map(|row| encoding[&row[site]])
                .collect();
            let identifier = *pattern_identifiers.entry(column.clone()).or_insert_with(|| {
                let identifier = PatternIdentifier::from(patterns.len());
                patterns.push(column);
                identifier
            });
            site_patterns.push(identifier);
        }

        Ok(Self {
            taxon_names,
            site_patterns,
            patterns,
            alphabet,
        })
    }

    /// Assembles an alignment from an already-built pattern table.
    ///
    /// No validation is performed; decoding reports any inconsistency per
    /// site.
    pub fn from_parts(
        taxon_names: Vec<String>,
        site_patterns: impl IntoIterator<Item = usize>,
        patterns: impl IntoIterator<Item = Vec<StateCode>>,
        alphabet: Vec<char>,
    ) -> Self {
        Self {
            taxon_names,
            site_patterns: site_patterns
                .into_iter()
                .map(PatternIdentifier::from)
                .collect::<Vec<_>>()
                .into(),
            patterns: patterns.into_iter().collect::<Vec<_>>().into(),
            alphabet,
        }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Alignment for PatternAlignment {
    fn site_count(&self) -> usize {
        self.site_patterns.len()
    }

    fn taxon_count(&self) -> usize {
        self.taxon_names.len()
    }

    fn taxon_names(&self) -> &[String] {
        &self.taxon_names
    }

    fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    fn pattern_index(&self, site: SiteIndex) -> PatternIdentifier {
        self.site_patterns[site]
    }

    fn pattern(&self, pattern: PatternIdentifier) -> Option<&[StateCode]> {
        (pattern.primitive() < self.patterns.len()).then(|| self.patterns[pattern].as_slice())
    }

    fn states_to_string(
        &self,
        states: &[StateCode],
    ) -> std::result::Result<String, SiteDecodeErrorKind> {
        states
            .iter()
            .map(|&code| {
                self.alphabet.get(code as usize).copied().ok_or(
                    SiteDecodeErrorKind::UnknownStateCode {
                        code,
                        alphabet_size: self.alphabet.len(),
                    },
                )
            })
            .collect()
    }
}
