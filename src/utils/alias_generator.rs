//! Short alias generation and validation.
//!
//! Aliases are fixed-length strings over the 62-symbol alphanumeric alphabet.
//! Uniqueness is not a property of the generator; it is enforced by the store,
//! and callers retry on collision.

use rand::Rng;

/// Number of characters in a generated alias.
pub const ALIAS_LENGTH: usize = 7;

/// Alphabet aliases are drawn from.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random alias of [`ALIAS_LENGTH`] characters.
///
/// Each character is sampled uniformly from the alphabet with the thread-local
/// RNG, so rapid successive calls do not repeat the same sequence.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias();
/// assert_eq!(alias.len(), 7);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias() -> String {
    let mut rng = rand::rng();

    (0..ALIAS_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Returns true if `alias` could have been produced by [`generate_alias`].
pub fn is_valid_alias(alias: &str) -> bool {
    alias.len() == ALIAS_LENGTH && alias.bytes().all(|b| CHARSET.contains(&b))
}
