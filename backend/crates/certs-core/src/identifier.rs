//! Content-addressed identifiers.
//!
//! Users are keyed by a digest of their email and certificates by a digest of
//! their title, so the same input always maps to the same primary key. The
//! digest is MD5; collisions are possible and not handled.

use md5::{Digest, Md5};

/// Length of a derived identifier in hex characters.
pub const ID_LENGTH: usize = 32;

/// Derive a stable 32-character lowercase hex identifier from `input`.
pub fn derive_id(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}
