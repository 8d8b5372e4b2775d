//! Rabin-Karp Search (rolling hash)
//!
//! **Core idea**: hash every M-byte window of the text with a polynomial
//! hash that can be updated in O(1) as the window slides one byte.
//! A hash hit is confirmed byte-by-byte, so collisions never produce a
//! false match.
//!
//! `hash(w) = Σ w[i] × base^(M-1-i)  (mod modulus)`

/// Default polynomial base (one digit per byte value)
pub const DEFAULT_BASE: u64 = 256;

/// Default modulus
pub const DEFAULT_MODULUS: u64 = 101;

/// `a × b mod m` without overflow for any `u64` modulus
#[inline(always)]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `a + b mod m` without overflow for any `u64` modulus
#[inline(always)]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// Polynomial hash of a fixed-length window, updated incrementally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollingHash {
    value: u64,
    /// base^(len-1) mod modulus: weight of the outgoing byte
    high: u64,
    base: u64,
    modulus: u64,
    len: usize,
}

impl RollingHash {
    /// Hash `window` from scratch
    pub fn new(window: &[u8], base: u64, modulus: u64) -> Self {
        let modulus = modulus.max(1);
        let base = base % modulus;

        let mut value = 0;
        let mut high = 1 % modulus;
        for (i, &c) in window.iter().enumerate() {
            value = add_mod(mul_mod(value, base, modulus), c as u64, modulus);
            if i > 0 {
                high = mul_mod(high, base, modulus);
            }
        }

        RollingHash {
            value,
            high,
            base,
            modulus,
            len: window.len(),
        }
    }

    /// Slide the window one byte: drop `outgoing` from the front and
    /// append `incoming` at the back.
    #[inline(always)]
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let m = self.modulus;
        let out = mul_mod(outgoing as u64, self.high, m);
        // Add `m - out` instead of subtracting to stay non-negative
        let without = add_mod(self.value, m - out, m);
        self.value = add_mod(mul_mod(without, self.base, m), incoming as u64, m);
    }

    /// Current hash value
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Window length this hash covers
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Rabin-Karp searcher with a configurable hash.
///
/// # Example
/// ```
/// use alice_substring::rabin_karp::RabinKarp;
///
/// let rk = RabinKarp::new(31, 1_000_000_007);
/// assert_eq!(rk.find(b"the quick brown fox", b"brown"), Some(10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RabinKarp {
    base: u64,
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        RabinKarp {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl RabinKarp {
    /// Create a searcher. A zero `modulus` is clamped to 1.
    pub fn new(base: u64, modulus: u64) -> Self {
        RabinKarp {
            base,
            modulus: modulus.max(1),
        }
    }

    /// Polynomial base
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Hash modulus (at least 1)
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Find the first occurrence of `pattern` in `text`
    ///
    /// Returns `None` for an empty pattern.
    pub fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        let m = pattern.len();
        let n = text.len();
        if m == 0 || m > n {
            return None;
        }

        let target = RollingHash::new(pattern, self.base, self.modulus).value();
        let mut window = RollingHash::new(&text[..m], self.base, self.modulus);

        for i in 0..=n - m {
            if window.value() == target && &text[i..i + m] == pattern {
                return Some(i);
            }
            if i < n - m {
                window.roll(text[i], text[i + m]);
            }
        }

        None
    }
}

/// Find the first occurrence of `pattern` in `text` (base 256, modulus 101)
///
/// # Example
/// ```
/// use alice_substring::rabin_karp;
///
/// assert_eq!(rabin_karp::find(b"abracadabra", b"abra"), Some(0));
/// ```
#[inline]
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    RabinKarp::default().find(text, pattern)
}
