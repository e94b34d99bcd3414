// WHY: bad-symbol heuristic only; the window is compared right-to-left and shifted past the mismatch

use std::collections::HashMap;
use std::hash::Hash;

/// Rightmost index of every distinct symbol in `needle`
pub fn last_occurrence_table<T: Eq + Hash>(needle: &[T]) -> HashMap<&T, usize> {
    let mut table = HashMap::with_capacity(needle.len());
    for (index, symbol) in needle.iter().enumerate() {
        table.insert(symbol, index);
    }
    table
}

/// First occurrence of a non-empty `needle` using its last-occurrence table
pub fn find<T: Eq + Hash>(haystack: &[T], needle: &[T], table: &HashMap<&T, usize>) -> Option<usize> {
    let m = needle.len();
    let n = haystack.len();
    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let mut shift = 0;
    while shift <= n - m {
        // j counts the still-unverified prefix of the window
        let mut j = m;
        while j > 0 && needle[j - 1] == haystack[shift + j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(shift);
        }

        let mismatch = j - 1;
        // max(1, mismatch - last[symbol]) with an absent symbol treated as index -1
        let advance = match table.get(&haystack[shift + mismatch]) {
            Some(&last) if last < mismatch => mismatch - last,
            Some(_) => 1,
            None => mismatch + 1,
        };
        shift += advance;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_occurrence_keeps_rightmost() {
        let needle = ["to", "be", "or", "not", "to", "be"];
        let table = last_occurrence_table(&needle);
        assert_eq!(table[&"to"], 4);
        assert_eq!(table[&"be"], 5);
        assert_eq!(table[&"or"], 2);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_find_with_absent_symbol_skips_window() {
        let haystack: Vec<char> = "xxxxxabc".chars().collect();
        let needle: Vec<char> = "abc".chars().collect();
        let table = last_occurrence_table(&needle);
        assert_eq!(find(&haystack, &needle, &table), Some(5));
    }

    #[test]
    fn test_find_when_mismatch_symbol_occurs_right_of_mismatch() {
        // mismatch at index 0 on 'b', whose last occurrence is 1: shift must still advance by one
        let haystack: Vec<char> = "bbab".chars().collect();
        let needle: Vec<char> = "ab".chars().collect();
        let table = last_occurrence_table(&needle);
        assert_eq!(find(&haystack, &needle, &table), Some(2));
    }

    #[test]
    fn test_find_single_token() {
        let haystack = ["the", "cat", "sat"];
        let needle = ["sat"];
        let table = last_occurrence_table(&needle);
        assert_eq!(find(&haystack, &needle, &table), Some(2));

        let missing = ["dog"];
        assert_eq!(find(&haystack, &missing, &last_occurrence_table(&missing)), None);
    }
}
