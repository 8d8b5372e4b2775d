//! Algorithm selection
//!
//! One enum over the three searchers so callers (and benchmarks) can pick
//! an algorithm at runtime or by name.

extern crate alloc;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseAlgorithmError;
use crate::{boyer_moore, kmp, rabin_karp};

/// Substring search algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    BoyerMoore,
    KnuthMorrisPratt,
    RabinKarp,
}

impl Algorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BoyerMoore,
        Algorithm::KnuthMorrisPratt,
        Algorithm::RabinKarp,
    ];

    /// Find the first occurrence of `pattern` in `text`
    ///
    /// # Example
    /// ```
    /// use alice_substring::Algorithm;
    ///
    /// for algo in Algorithm::ALL {
    ///     assert_eq!(algo.find(b"abracadabra", b"abra"), Some(0));
    /// }
    /// ```
    pub fn find(self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        let result = match self {
            Algorithm::BoyerMoore => boyer_moore::find(text, pattern),
            Algorithm::KnuthMorrisPratt => kmp::find(text, pattern),
            Algorithm::RabinKarp => rabin_karp::find(text, pattern),
        };
        tracing::trace!(
            algorithm = self.name(),
            text_len = text.len(),
            pattern_len = pattern.len(),
            ?result,
            "substring search"
        );
        result
    }

    /// Check if `pattern` occurs in `text`
    #[inline]
    pub fn contains(self, text: &[u8], pattern: &[u8]) -> bool {
        self.find(text, pattern).is_some()
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::KnuthMorrisPratt => "kmp",
            Algorithm::RabinKarp => "rabin-karp",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boyer-moore" | "boyer_moore" | "bm" => Ok(Algorithm::BoyerMoore),
            "kmp" | "knuth-morris-pratt" => Ok(Algorithm::KnuthMorrisPratt),
            "rabin-karp" | "rabin_karp" | "rk" => Ok(Algorithm::RabinKarp),
            _ => Err(ParseAlgorithmError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_agree() {
        let cases: [(&[u8], &[u8], Option<usize>); 6] = [
            (b"abracadabra", b"abra", Some(0)),
            (b"abcdef", b"xyz", None),
            (b"aaaaa", b"aa", Some(0)),
            (b"hello", b"hello", Some(0)),
            (b"hello", b"", None),
            (b"", b"x", None),
        ];

        for (text, pattern, expected) in cases {
            for algo in Algorithm::ALL {
                assert_eq!(algo.find(text, pattern), expected, "{}", algo);
            }
        }
    }

    #[test]
    fn test_contains() {
        assert!(Algorithm::KnuthMorrisPratt.contains(b"hello world", b"o w"));
        assert!(!Algorithm::RabinKarp.contains(b"hello world", b"xyz"));
    }

    #[test]
    fn test_name_roundtrip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("BM".parse::<Algorithm>(), Ok(Algorithm::BoyerMoore));
        assert_eq!("Knuth-Morris-Pratt".parse::<Algorithm>(), Ok(Algorithm::KnuthMorrisPratt));
        assert_eq!("rabin_karp".parse::<Algorithm>(), Ok(Algorithm::RabinKarp));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "aho-corasick".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ParseAlgorithmError::Unknown("aho-corasick".to_string()));
        assert!(err.to_string().contains("aho-corasick"));
    }

    #[test]
    fn test_default() {
        assert_eq!(Algorithm::default(), Algorithm::BoyerMoore);
    }
}
