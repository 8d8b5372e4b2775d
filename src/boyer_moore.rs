//! Boyer-Moore Search (bad-character rule)
//!
//! Compares each window right to left and, on a mismatch, uses the
//! bad-character table to skip alignments that cannot match.
//!
//! - Preprocessing: O(M + 256)
//! - Search: O(N / M) best case, O(N × M) worst case

/// Size of the byte alphabet
const ALPHABET: usize = 256;

/// Build the bad-character table
///
/// `table[c]` is the distance from the rightmost occurrence of `c` in
/// `pattern[..m - 1]` to the last pattern position, or `m` when `c` does
/// not occur there.
#[inline]
pub fn build_bad_char_table(pattern: &[u8]) -> [usize; ALPHABET] {
    let m = pattern.len();
    let mut table = [m; ALPHABET];

    // Later positions overwrite earlier ones: rightmost occurrence wins
    for (i, &c) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
        table[c as usize] = m - i - 1;
    }

    table
}

/// Find the first occurrence of `pattern` in `text`
///
/// Returns `None` for an empty pattern.
///
/// # Example
/// ```
/// use alice_substring::boyer_moore;
///
/// assert_eq!(boyer_moore::find(b"abracadabra", b"cad"), Some(4));
/// assert_eq!(boyer_moore::find(b"abracadabra", b"cab"), None);
/// ```
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 || m > n {
        return None;
    }

    let table = build_bad_char_table(pattern);

    let mut i = 0;
    while i <= n - m {
        // Scan the window from its last byte backwards
        let mut j = m;
        while j > 0 && text[i + j - 1] == pattern[j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(i);
        }

        // Mismatch at pattern index j - 1.
        // Align the rightmost earlier occurrence of the bad byte under it.
        let mismatch = j - 1;
        let bad = text[i + mismatch] as usize;
        let shift = (mismatch + table[bad] + 1).saturating_sub(m);
        i += shift.max(1);
    }

    None
}
