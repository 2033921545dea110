//! Identifier and share token generation.

use rand::Rng;
use uuid::Uuid;

use crate::error::{TripDirError, TripDirResult};

/// Alphabet for share tokens: URL-safe, without look-alike characters.
const TOKEN_ALPHABET: &[u8] = b"23456789abcdefghjkmnpqrstuvwxyzABCDEFGHJKMNPQRSTUVWXYZ";

/// Length of freshly generated share tokens.
pub const SHARE_TOKEN_LEN: usize = 12;

/// Shortest token we accept when resolving (older tokens may be shorter).
pub const MIN_SHARE_TOKEN_LEN: usize = 10;

/// How many times record creation retries on an id collision before
/// giving up with `CreationFailed`.
pub const ID_ATTEMPTS: u32 = 3;

/// A fresh random record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate an id that `is_taken` does not already know, retrying with a
/// fresh id on collision up to `max_attempts` times.
pub fn generate_unique_id(
    mut is_taken: impl FnMut(&str) -> bool,
    max_attempts: u32,
) -> TripDirResult<String> {
    for _ in 0..max_attempts {
        let id = new_id();
        if !is_taken(&id) {
            return Ok(id);
        }
    }
    Err(TripDirError::CreationFailed {
        attempts: max_attempts,
    })
}

/// A fresh random share token.
pub fn new_share_token() -> String {
    let mut rng = rand::thread_rng();
    (0..SHARE_TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Whether a string could be a share token at all. Malformed tokens are
/// resolved to "not found" without touching storage.
pub fn is_well_formed_token(s: &str) -> bool {
    s.len() >= MIN_SHARE_TOKEN_LEN && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_token_shape() {
        let token = new_share_token();
        assert_eq!(token.len(), SHARE_TOKEN_LEN);
        assert!(is_well_formed_token(&token));
    }

    #[test]
    fn test_well_formed_token() {
        assert!(is_well_formed_token("abcdef234567"));
        assert!(!is_well_formed_token("short"));
        assert!(!is_well_formed_token("has/slash234"));
        assert!(!is_well_formed_token("has space2345"));
    }

    #[test]
    fn test_generate_unique_id_returns_free_id() {
        let taken = ["a", "b"];
        let id = generate_unique_id(|id| taken.contains(&id), ID_ATTEMPTS).unwrap();
        assert!(!taken.contains(&id.as_str()));
    }

    #[test]
    fn test_generate_unique_id_gives_up_after_max_attempts() {
        let mut attempts = 0;
        let err = generate_unique_id(
            |_| {
                attempts += 1;
                true
            },
            3,
        )
        .unwrap_err();
        assert_eq!(attempts, 3);
        assert!(matches!(err, TripDirError::CreationFailed { attempts: 3 }));
    }
}
