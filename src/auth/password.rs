use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use super::{AuthError, Result};

/// Hash a plaintext password with a fresh random salt.
///
/// The output is a PHC string carrying the algorithm identifier, parameters,
/// salt and digest, so verification is self-describing and old hashes keep
/// verifying after a parameter or algorithm migration. Two calls with the
/// same plaintext produce different strings.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::Hash)
}

/// Verify a plaintext against a stored PHC hash string.
///
/// Recomputes with the salt and parameters embedded in the stored hash and
/// compares in constant time. A malformed stored hash yields `false` rather
/// than an error so a corrupted record cannot take down the authorization
/// path. The plaintext is never logged.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("Pw1!secret").expect("hashing should succeed");
        assert!(verify_password("Pw1!secret", &hash));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("correct horse").expect("hashing should succeed");
        assert!(!verify_password("battery staple", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("repeat-me").expect("hashing should succeed");
        let second = hash_password("repeat-me").expect("hashing should succeed");
        assert_ne!(first, second, "fresh salt must make hashes unique");
        assert!(verify_password("repeat-me", &first));
        assert!(verify_password("repeat-me", &second));
    }

    #[test]
    fn malformed_stored_hash_is_rejected_not_fatal() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
