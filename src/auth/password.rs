use md5::Md5;
use sha2::{Digest, Sha256};

/// Stored password digest: `md5_hex(sha256_hex(plain))`.
///
/// This is the value the login and user procedures compare against; the
/// plaintext never reaches the database.
pub fn hash_password(plain: &str) -> String {
    let sha = hex::encode(Sha256::digest(plain.as_bytes()));
    hex::encode(Md5::digest(sha.as_bytes()))
}
