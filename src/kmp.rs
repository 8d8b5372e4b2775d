//! Knuth-Morris-Pratt Search
//!
//! The failure table lets a mismatch resume from the longest prefix of the
//! pattern that is still matched, so the text cursor never moves backwards.
//!
//! - Preprocessing: O(M)
//! - Search: O(N)

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Build the failure table (a.k.a. prefix function)
///
/// `table[i]` = length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
#[inline]
pub fn build_failure_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut table = vec![0usize; m];

    let mut k = 0;
    for i in 1..m {
        while k > 0 && pattern[i] != pattern[k] {
            k = table[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        table[i] = k;
    }

    table
}

/// Find the first occurrence of `pattern` in `text`
///
/// Returns `None` for an empty pattern.
///
/// # Example
/// ```
/// use alice_substring::kmp;
///
/// assert_eq!(kmp::find(b"mississippi", b"issip"), Some(4));
/// ```
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    let table = build_failure_table(pattern);

    let mut i = 0; // text cursor
    let mut j = 0; // pattern cursor
    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                return Some(i - m);
            }
        } else if j > 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }

    None
}
