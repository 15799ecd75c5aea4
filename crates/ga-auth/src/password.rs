//! Argon2 hashing for stored account passwords.
//!
//! Only the PHC-formatted hash string ever reaches the database; the
//! plaintext lives for the duration of one request.

use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

fn salt() -> SaltString {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    SaltString::encode_b64(&bytes).expect("16 bytes fit in a salt")
}

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|hash| hash.to_string())
}

/// Constant-time verification; any parse failure of the stored hash
/// counts as a mismatch rather than an error.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashword = hash("correct horse battery staple").unwrap();
        assert!(verify("correct horse battery staple", &hashword));
        assert!(!verify("incorrect horse", &hashword));
    }

    #[test]
    fn salts_differ_between_hashes() {
        assert_ne!(hash("same password").unwrap(), hash("same password").unwrap());
    }

    #[test]
    fn unparsable_stored_hash_never_verifies() {
        assert!(!verify("anything", "not-a-phc-string"));
    }
}
