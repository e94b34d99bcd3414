// WHY: prefix-table scan never moves the haystack cursor backwards, O(|haystack| + |needle|)

/// Border function: for each prefix `needle[..=i]`, the length of its longest
/// proper prefix that is also a suffix
pub fn border_table<T: PartialEq>(needle: &[T]) -> Vec<usize> {
    let mut table = vec![0; needle.len()];
    let mut k = 0;

    for i in 1..needle.len() {
        while k > 0 && needle[i] != needle[k] {
            k = table[k - 1];
        }
        if needle[i] == needle[k] {
            k += 1;
        }
        table[i] = k;
    }

    table
}

/// First occurrence of a non-empty `needle` using its precomputed border table
pub fn find<T: PartialEq>(haystack: &[T], needle: &[T], table: &[usize]) -> Option<usize> {
    debug_assert_eq!(needle.len(), table.len());
    if needle.is_empty() {
        return Some(0);
    }

    let mut matched = 0;
    for (pos, item) in haystack.iter().enumerate() {
        // Fall back through borders until the next needle symbol can extend the match
        while matched > 0 && *item != needle[matched] {
            matched = table[matched - 1];
        }
        if *item == needle[matched] {
            matched += 1;
        }
        if matched == needle.len() {
            return Some(pos + 1 - needle.len());
        }
    }

    None
}
