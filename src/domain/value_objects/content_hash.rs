//! Content hash of a generated module
//!
//! Used to tell whether a regenerated `index.ts` differs from the file that
//! was on disk before the run.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest rendered as `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    pub fn of(content: &str) -> Self {
        let digest = Sha256::digest(content.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters, for log lines
    pub fn short(&self) -> &str {
        let hex = &self.0[Self::PREFIX.len()..];
        &hex[..12]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_has_prefix_and_full_digest() {
        let hash = ContentHash::of("export {};\n");
        assert!(hash.as_str().starts_with("sha256:"));
        assert_eq!(hash.as_str().len(), 7 + 64);
    }

    #[test]
    fn identical_content_hashes_equal() {
        assert_eq!(ContentHash::of("a"), ContentHash::of("a"));
        assert_ne!(ContentHash::of("a"), ContentHash::of("a\n"));
    }

    #[test]
    fn short_is_hex_prefix() {
        let hash = ContentHash::of("x");
        assert_eq!(hash.short().len(), 12);
        assert!(hash.as_str().contains(hash.short()));
    }
}
