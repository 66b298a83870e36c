//! Password credentials hashed with Argon2id
//!
//! The plaintext password is never stored. Verification keeps the simple
//! boolean shape of an equality check.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;
use std::fmt;

use crate::error::PartyError;

/// Hash checked when no stored credential applies, so a miss costs one verification
static DECOY: Lazy<Option<Credential>> = Lazy::new(|| Credential::from_password("decoy").ok());

/// A stored password credential in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    hash: String,
}

impl Credential {
    /// Hashes `password` with a fresh random salt
    pub fn from_password(password: &str) -> Result<Self, PartyError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PartyError::Credential(format!("Failed to hash password: {e}")))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wraps an existing PHC hash string
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Returns true iff `candidate` is the password this credential was made from
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, candidate: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Runs a full verification against a throwaway hash and always fails
    ///
    /// Used for unknown user ids so they take as long to reject as a wrong
    /// password.
    pub fn verify_decoy(candidate: &str) -> bool {
        if let Some(decoy) = DECOY.as_ref() {
            decoy.verify(candidate);
        }
        false
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let credential = Credential::from_password("pw").unwrap();

        assert!(credential.verify("pw"));
        assert!(!credential.verify("pw2"));
        assert!(!credential.verify(""));
    }

    #[test]
    fn test_different_salts() {
        let first = Credential::from_password("same").unwrap();
        let second = Credential::from_password("same").unwrap();

        assert_ne!(first, second);
        assert!(first.verify("same"));
        assert!(second.verify("same"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let credential = Credential::from_hash("not-a-valid-hash");
        assert!(!credential.verify("not-a-valid-hash"));
    }

    #[test]
    fn test_decoy_never_verifies() {
        assert!(!Credential::verify_decoy("decoy"));
        assert!(!Credential::verify_decoy(""));
    }

    #[test]
    fn test_debug_hides_hash() {
        let credential = Credential::from_password("secret").unwrap();
        assert_eq!(format!("{:?}", credential), "Credential(<redacted>)");
    }
}
