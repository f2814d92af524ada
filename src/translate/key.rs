//! Translation cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Only this many leading characters of a text take part in its cache key
pub const KEY_PREFIX_CHARS: usize = 100;

/// Generate a deterministic cache key for a translation request.
///
/// The key is a SHA-256 hash of the language pair and the first
/// [`KEY_PREFIX_CHARS`] characters of the text. Texts sharing that prefix
/// share a cache entry.
pub fn translation_key(source: &str, target: &str, text: &str) -> String {
    let prefix: String = text.chars().take(KEY_PREFIX_CHARS).collect();

    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hasher.update(b"|");
    hasher.update(target.as_bytes());
    hasher.update(b"|");
    hasher.update(prefix.as_bytes());

    format!("{:x}", hasher.finalize())
}
