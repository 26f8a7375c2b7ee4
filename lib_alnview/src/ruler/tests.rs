use super::ruler_labels;

#[test]
fn empty_ruler() {
    assert!(ruler_labels(0).is_empty());
}

#[test]
fn single_site() {
    assert_eq!(ruler_labels(1), vec!['1']);
}

#[test]
fn no_tick_at_exact_width() {
    assert_eq!(
        ruler_labels(10),
        vec!['1', '.', '.', '.', '.', '.', '.', '.', '.', '.']
    );
}

#[test]
fn first_decade_tick() {
    assert_eq!(
        ruler_labels(12),
        vec!['1', '.', '.', '.', '+', '.', '.', '.', '.', '1', '0', '.']
    );
}

#[test]
fn digits_past_the_grid_are_omitted() {
    // The tick at 100 needs three columns, but only two remain.
    let labels = ruler_labels(101);
    assert_eq!(labels[94], '+');
    assert_eq!(labels[99], '1');
    assert_eq!(labels[100], '0');

    // Ticks within the grid keep both digits.
    assert_eq!(labels[89], '9');
    assert_eq!(labels[90], '0');
}
