use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the plaintext password, the value stored in `users.password_digest`.
pub(crate) fn password_digest(password: &SecretString) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.expose_secret().as_bytes());
    format!("{:x}", hasher.finalize())
}
