//! Short code generation with collision-checked retries.
//!
//! Codes are drawn uniformly at random from the 62-character alphanumeric
//! alphabet using the system CSPRNG. Uniqueness is probabilistic: the
//! generator asks the store whether a candidate is taken and retries a
//! bounded number of times before falling back to a longer code.

use crate::error::AppError;
use async_trait::async_trait;

/// Alphabet for short codes: `A-Z`, `a-z`, `0-9`.
const CODE_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default short code length (62^6, roughly 5.68e10 combinations).
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Maximum collision-checked generation attempts before the fallback.
pub const MAX_TRIES: usize = 5;

// Bytes at or above 248 (= 4 * 62) are rejected to keep the draw uniform.
const REJECTION_BOUND: u8 = 248;

/// Existence check a code generator needs from a link store.
///
/// Deliberately narrow so the generator works against any store, not a
/// concrete repository type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeExists: Send + Sync {
    /// Returns `true` if a link with this short code already exists.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;
}

/// Generates a random short code of the given length.
///
/// Uses `getrandom` for entropy; every character is an independent uniform
/// draw from [`CODE_ALPHABET`].
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code(length: usize) -> String {
    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if byte >= REJECTION_BOUND {
                continue;
            }
            code.push(CODE_ALPHABET[(byte % 62) as usize] as char);
            if code.len() == length {
                break;
            }
        }
    }

    code
}

/// Generates a short code that did not exist in the store at check time.
///
/// Tries up to `max_tries` candidates of [`DEFAULT_CODE_LENGTH`] characters.
/// If every attempt collides, returns a single unchecked candidate one
/// character longer; the store's unique constraint on `short_code` is the
/// final backstop if even that collides.
///
/// # Errors
///
/// Propagates store errors from the existence check.
pub async fn generate_unique_code<E: CodeExists + ?Sized>(
    store: &E,
    max_tries: usize,
) -> Result<String, AppError> {
    for _ in 0..max_tries {
        let candidate = generate_code(DEFAULT_CODE_LENGTH);

        if !store.exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    Ok(generate_code(DEFAULT_CODE_LENGTH + 1))
}
