//! Password hashing.
//!
//! Passwords are write-only: they are hashed before they reach the database
//! and never read back out.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::errors::Error;

fn argon2() -> Result<Argon2<'static>, Error> {
    // Argon2id, 19 MiB, 2 passes, 1 lane
    let params = Params::new(19456, 2, 1, None).map_err(|e| Error::Internal {
        operation: format!("create argon2 params: {e}"),
    })?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password into a PHC string.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2()?.hash_password(password.as_bytes(), &salt).map_err(|e| Error::Internal {
        operation: format!("hash password: {e}"),
    })?;

    Ok(hash.to_string())
}

/// Hash off the async runtime; argon2 is deliberately slow.
pub async fn hash_password_blocking(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("join password hashing task: {e}"),
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn test_hash_verifies_and_hides_plaintext() {
        let hash = hash_password("longenough").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("longenough"));

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default().verify_password(b"longenough", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"wrong-password", &parsed).is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        assert_ne!(hash_password("longenough").unwrap(), hash_password("longenough").unwrap());
    }

    #[tokio::test]
    async fn test_blocking_hash() {
        let hash = hash_password_blocking("longenough".to_string()).await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }
}
