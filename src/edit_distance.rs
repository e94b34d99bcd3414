// WHY: Levenshtein distance over Unicode scalar values, not bytes
// Two rolling rows as wide as the shorter input keep memory at O(min(|a|, |b|))

use std::cmp::min;

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let (long, short) = ordered_by_length(a, b);
    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, short_ch) in short.iter().enumerate() {
            let cost = usize::from(long_ch != short_ch);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Like [`distance`], but gives up with `None` as soon as the result is known
/// to exceed `bound`.
pub fn distance_within(a: &str, b: &str, bound: usize) -> Option<usize> {
    let (long, short) = ordered_by_length(a, b);
    if long.len() - short.len() > bound {
        return None;
    }
    if short.is_empty() {
        return Some(long.len());
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut row_min = curr_row[0];
        for (j, short_ch) in short.iter().enumerate() {
            let cost = usize::from(long_ch != short_ch);
            curr_row[j + 1] = min(min(prev_row[j + 1] + 1, curr_row[j] + 1), prev_row[j] + cost);
            row_min = min(row_min, curr_row[j + 1]);
        }
        // Row minima never decrease, so the final cell cannot come back under the bound
        if row_min > bound {
            return None;
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let result = prev_row[short.len()];
    (result <= bound).then_some(result)
}

fn ordered_by_length(a: &str, b: &str) -> (Vec<char>, Vec<char>) {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    }
}
