//! # ALICE-Substring
//!
//! **Single-pattern substring search**
//!
//! > "Find the first place the pattern fits."
//!
//! ## Algorithms
//!
//! - **Boyer-Moore**: right-to-left window compare, bad-character skips
//! - **Knuth-Morris-Pratt**: failure table, text cursor never backs up
//! - **Rabin-Karp**: rolling polynomial hash, byte-checked on hash hit
//!
//! | Algorithm | Preprocess | Search (worst) | Extra space |
//! |-----------|------------|----------------|-------------|
//! | Boyer-Moore | O(M + 256) | O(N × M) | 256 words |
//! | KMP | O(M) | **O(N)** | M words |
//! | Rabin-Karp | O(M) | O(N × M) | **O(1)** |
//!
//! Every searcher returns the index of the **first** occurrence, or `None`.
//! An empty pattern is never found.
//!
//! ## Example
//!
//! ```
//! use alice_substring::{find, Algorithm};
//!
//! assert_eq!(find(b"abracadabra", b"abra"), Some(0));
//! assert_eq!(find(b"abcdef", b"xyz"), None);
//!
//! // Every algorithm agrees
//! for algo in Algorithm::ALL {
//!     assert_eq!(algo.find(b"aaaaa", b"aa"), Some(0));
//! }
//!
//! // Pick one by name
//! let algo: Algorithm = "kmp".parse().unwrap();
//! assert_eq!(algo.find(b"mississippi", b"ssi"), Some(2));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algorithm;
pub mod boyer_moore;
pub mod error;
pub mod kmp;
pub mod rabin_karp;

pub use algorithm::Algorithm;
pub use error::ParseAlgorithmError;
pub use rabin_karp::{RabinKarp, RollingHash};

/// Version
pub const VERSION: &str = "0.1.0";

/// Find the first occurrence of `pattern` in `text` with the default
/// algorithm (Boyer-Moore).
#[inline]
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    Algorithm::default().find(text, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_search() {
        assert_eq!(find(b"abracadabra", b"abra"), Some(0));
        assert_eq!(find(b"abracadabra", b"bra"), Some(1));
        assert_eq!(find(b"abracadabra", b"a"), Some(0));
        assert_eq!(find(b"abracadabra", b"xyz"), None);
    }

    #[test]
    fn test_str_input() {
        let text = "the quick brown fox";
        assert_eq!(find(text.as_bytes(), "fox".as_bytes()), Some(16));
    }

    #[test]
    fn test_empty_pattern() {
        // Empty pattern is never found
        for algo in Algorithm::ALL {
            assert_eq!(algo.find(b"hello", b""), None);
            assert_eq!(algo.find(b"", b""), None);
        }
    }

    #[test]
    fn test_full_text_match() {
        let text = b"exactmatch";
        for algo in Algorithm::ALL {
            assert_eq!(algo.find(text, text), Some(0));
        }
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Algorithm>();
        assert_send_sync::<RabinKarp>();
        assert_send_sync::<RollingHash>();
        assert_send_sync::<ParseAlgorithmError>();
    }

    #[test]
    fn test_large_text() {
        let mut text = Vec::new();
        for _ in 0..100 {
            text.extend_from_slice(b"the quick brown fox jumps over the lazy dog ");
        }
        text.extend_from_slice(b"alice");

        for algo in Algorithm::ALL {
            assert_eq!(algo.find(&text, b"fox"), Some(16));
            assert_eq!(algo.find(&text, b"alice"), Some(4400));
            assert_eq!(algo.find(&text, b"cat"), None);
        }
    }
}
