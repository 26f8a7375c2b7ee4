#[cfg(test)]
mod tests;

/// Column labels of the site ruler, one character per site.
///
/// Position 1 is labelled `1`, each decade tick spreads its decimal digits
/// over the columns starting at the tick, and a `+` marks the column five
/// before each tick. Placements past the grid width are omitted.
pub fn ruler_labels(site_count: usize) -> Vec<char> {
    let mut labels = vec!['.'; site_count];
    if site_count > 0 {
        labels[0] = '1';
    }

    let mut tick = 10;
    while tick < site_count {
        for (offset, digit) in tick.to_string().chars().enumerate() {
            let column = tick - 1 + offset;
            if column < site_count {
                labels[column] = digit;
            }
        }
        labels[tick - 6] = '+';

        tick += 10;
    }

    labels
}
