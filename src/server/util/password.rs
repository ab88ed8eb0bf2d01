//! Password hashing and random credential generation.
//!
//! Passwords are stored as argon2id PHC strings. One-time passwords and
//! generated account passwords are drawn from the thread-local RNG.

use argon2::Argon2;
use password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::Rng;

use crate::server::error::AppError;

/// Length of passwords generated for accounts created without one.
pub const GENERATED_PASSWORD_LENGTH: usize = 10;

/// Number of digits in a one-time password.
pub const OTP_LENGTH: usize = 6;

/// Hashes a plain password with argon2id and a fresh salt.
///
/// # Arguments
/// - `password` - Plain password as submitted by the client
///
/// # Returns
/// - `Ok(String)` - PHC string to store in `user.password`
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a plain password against a stored hash.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Generates a random alphanumeric password for a new account.
pub fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..GENERATED_PASSWORD_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Generates a numeric one-time password, leading zeros included.
pub fn generate_otp() -> String {
    let mut rng = rand::rng();

    (0..OTP_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
