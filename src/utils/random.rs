//! Random name fragments for pages and scratch checkouts.

use rand::Rng;

/// Generate a random string of `len` lowercase ASCII letters.
pub fn random_lowercase(len: usize) -> String {
    let mut rng = rand::rng();
    std::iter::repeat_with(|| char::from(rng.random_range(b'a'..=b'z')))
        .take(len)
        .collect()
}
