/// Positions for an ascending list of scores, with ties sharing a place:
/// `[-3, -1, -1, 2]` gives `[1, 2, 2, 4]`.
#[must_use]
pub fn shared_positions(sorted_scores: &[i32]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(sorted_scores.len());
    for (idx, score) in sorted_scores.iter().enumerate() {
        let position = match idx.checked_sub(1) {
            Some(prev) if sorted_scores[prev] == *score => positions[prev],
            _ => idx + 1,
        };
        positions.push(position);
    }
    positions
}

/// Sort by score then name, and stamp shared positions.
pub fn sort_and_rank<T>(
    items: &mut [T],
    score: impl Fn(&T) -> i32,
    name: impl Fn(&T) -> &str,
    mut set_position: impl FnMut(&mut T, usize),
) {
    items.sort_by(|a, b| score(a).cmp(&score(b)).then_with(|| name(a).cmp(name(b))));
    let scores: Vec<i32> = items.iter().map(&score).collect();
    for (item, position) in items.iter_mut().zip(shared_positions(&scores)) {
        set_position(item, position);
    }
}
