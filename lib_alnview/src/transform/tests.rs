use std::collections::BTreeMap;

use crate::{
    alignment::{
        PatternAlignment,
        index_types::{SiteIndex, TaxonIndex},
    },
    color::{ColorPolicy, Rgb, letter_wheel_color},
    error::SiteDecodeErrorKind,
    grid::DisplayToken,
};

use super::{build_display_grid, compute_dominant_characters, dominant_character};

fn primate_pair() -> PatternAlignment {
    PatternAlignment::from_rows(
        vec!["human".to_string(), "chimp".to_string()],
        &["AGT", "AGA"],
    )
    .unwrap()
}

#[test]
fn dominant_strict_maximum() {
    assert_eq!(dominant_character("AAGGG"), Some('G'));
    assert_eq!(dominant_character("T"), Some('T'));
    assert_eq!(dominant_character(""), None);
}

#[test]
fn dominant_tie_breaks_to_lowest_code() {
    // A and G both occur twice; A has the lower character code.
    assert_eq!(dominant_character("AAGG"), Some('A'));
    assert_eq!(dominant_character("GGAA"), Some('A'));
    assert_eq!(dominant_character("TA"), Some('A'));
}

#[test]
fn dominant_characters_of_alignment() {
    let alignment = primate_pair();
    let (dominant, errors) = compute_dominant_characters(&alignment);
    assert_eq!(dominant, vec![Some('A'), Some('G'), Some('A')]);
    assert!(errors.is_empty());
}

#[test]
fn dots_compress_dominant_cells() {
    let alignment = primate_pair();
    let grid = build_display_grid(&alignment, &ColorPolicy::default());

    assert_eq!(
        grid.rows()[0],
        vec![
            DisplayToken::Plain('.'),
            DisplayToken::Plain('.'),
            DisplayToken::Plain('T'),
        ]
    );
    assert_eq!(
        grid.rows()[1],
        vec![
            DisplayToken::Plain('.'),
            DisplayToken::Plain('.'),
            DisplayToken::Plain('.'),
        ]
    );

    assert_eq!(grid.dominant_character(SiteIndex::from(2)), Some('A'));
    assert_eq!(
        grid.cell(TaxonIndex::from(0), SiteIndex::from(2)),
        DisplayToken::Plain('T')
    );
    assert_eq!(
        grid.row(TaxonIndex::from(1))[2],
        DisplayToken::Plain('.')
    );
}

#[test]
fn without_dots_all_cells_are_literal() {
    let alignment = primate_pair();
    let grid = build_display_grid(&alignment, &ColorPolicy::new(false, false));

    assert_eq!(
        grid.rows()[0],
        vec![
            DisplayToken::Plain('A'),
            DisplayToken::Plain('G'),
            DisplayToken::Plain('T'),
        ]
    );
}

#[test]
fn grid_building_is_idempotent() {
    let alignment = primate_pair();
    let policy = ColorPolicy::new(true, true);
    assert_eq!(
        build_display_grid(&alignment, &policy),
        build_display_grid(&alignment, &policy)
    );
}

#[test]
fn colored_tokens_follow_the_letter_wheel() {
    let alignment = primate_pair();
    let grid = build_display_grid(&alignment, &ColorPolicy::new(true, true));

    // The dot token is coloured by the character it stands for.
    assert_eq!(
        grid.rows()[0][0],
        DisplayToken::Colored {
            glyph: '.',
            color: letter_wheel_color(0),
        }
    );
    assert_eq!(
        grid.rows()[0][2],
        DisplayToken::Colored {
            glyph: 'T',
            color: letter_wheel_color(b'T' - b'A'),
        }
    );
}

#[test]
fn custom_color_overrides_dot_and_distinct_tokens() {
    let alignment = primate_pair();
    let custom = BTreeMap::from([('A', Rgb::new(255, 0, 0))]);

    let dotted = build_display_grid(
        &alignment,
        &ColorPolicy::new(true, true).with_custom_colors(custom.clone()),
    );
    assert_eq!(
        dotted.rows()[0][0],
        DisplayToken::Colored {
            glyph: '.',
            color: Rgb::new(255, 0, 0),
        }
    );

    let literal = build_display_grid(
        &alignment,
        &ColorPolicy::new(true, false).with_custom_colors(custom),
    );
    assert_eq!(
        literal.rows()[0][0],
        DisplayToken::Colored {
            glyph: 'A',
            color: Rgb::new(255, 0, 0),
        }
    );
}

#[test]
fn empty_alignment_yields_empty_grid() {
    let alignment = PatternAlignment::from_rows(Vec::new(), &Vec::<String>::new()).unwrap();
    let grid = build_display_grid(&alignment, &ColorPolicy::default());
    assert!(grid.is_empty());
    assert_eq!(grid.taxon_count(), 0);
    assert_eq!(grid.site_count(), 0);
    assert!(grid.decode_errors().is_empty());
}

#[test]
fn zero_site_alignment_yields_empty_rows() {
    let alignment =
        PatternAlignment::from_rows(vec!["a".to_string(), "b".to_string()], &["", ""]).unwrap();
    let grid = build_display_grid(&alignment, &ColorPolicy::default());
    assert!(grid.is_empty());
    assert_eq!(grid.taxon_count(), 2);
    assert_eq!(grid.site_count(), 0);
    assert!(grid.rows().iter().all(|row| row.is_empty()));
}

#[test]
fn undecodable_site_renders_blank_and_is_reported() {
    // Site 1 references a pattern that does not exist.
    let alignment = PatternAlignment::from_parts(
        vec!["human".to_string(), "chimp".to_string()],
        [0, 1],
        [vec![0, 0]],
        vec!['A'],
    );
    let grid = build_display_grid(&alignment, &ColorPolicy::default());

    assert_eq!(grid.dominant_characters(), &[Some('A'), None]);
    assert_eq!(grid.rows()[0][1], DisplayToken::Blank);
    assert_eq!(grid.rows()[1][1], DisplayToken::Blank);

    assert_eq!(grid.decode_errors().len(), 1);
    assert_eq!(grid.decode_errors()[0].site, 1);
    assert_eq!(
        grid.decode_errors()[0].kind,
        SiteDecodeErrorKind::PatternOutOfBounds {
            pattern: 1,
            pattern_count: 1,
        }
    );
    assert_eq!(
        grid.decode_errors()[0].to_string(),
        "failed to decode site 1: pattern index 1 is out of bounds (pattern count: 1)"
    );
}

#[test]
fn unknown_state_code_is_reported() {
    let alignment = PatternAlignment::from_parts(
        vec!["human".to_string(), "chimp".to_string()],
        [0],
        [vec![0, 7]],
        vec!['A'],
    );
    let (dominant, errors) = compute_dominant_characters(&alignment);

    assert_eq!(dominant, vec![None]);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        SiteDecodeErrorKind::UnknownStateCode {
            code: 7,
            alphabet_size: 1,
        }
    );
}
