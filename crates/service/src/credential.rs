//! Password policy and hashing.
//!
//! Strength rules and the breach denylist are fixed; hashing is bcrypt
//! with a fixed cost so stored hashes embed their own salt and parameters.

use crate::errors::ServiceError;

/// bcrypt work factor applied to every new hash.
pub const BCRYPT_COST: u32 = 10;

/// Known-weak passwords rejected outright, matched exactly (case-sensitive).
pub const BREACHED_PASSWORDS: [&str; 15] = [
    "123456",
    "password",
    "123456789",
    "12345678",
    "12345",
    "111111",
    "1234567",
    "sunshine",
    "qwerty",
    "iloveyou",
    "princess",
    "admin",
    "welcome",
    "666666",
    "abc123",
];

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A strong password is at least 8 characters and mixes uppercase,
/// lowercase, a digit, and one of the fixed special characters.
pub fn is_strong(password: &str) -> bool {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    long_enough && has_upper && has_lower && has_digit && has_special
}

/// True iff the password appears on the breach denylist.
pub fn is_commonly_breached(password: &str) -> bool {
    BREACHED_PASSWORDS.contains(&password)
}

/// Hash with a fresh random salt; two calls on the same input differ.
pub fn hash(password: &str) -> Result<String, ServiceError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| ServiceError::Hash(e.to_string()))
}

/// Verify against a stored hash. A malformed stored hash is an internal
/// error, distinct from `Ok(false)` for a wrong password.
pub fn verify(password: &str, stored_hash: &str) -> Result<bool, ServiceError> {
    bcrypt::verify(password, stored_hash).map_err(|e| ServiceError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_rules() {
        assert!(is_strong("Abcdef1!"));
        assert!(!is_strong("abcdefgh")); // no uppercase/digit/special
        assert!(!is_strong("Abcdef1")); // too short
        assert!(!is_strong("ABCDEF1!")); // no lowercase
        assert!(!is_strong("Abcdefg!")); // no digit
        assert!(!is_strong("Abcdefg1")); // no special
    }

    #[test]
    fn breach_list_is_exact_and_case_sensitive() {
        assert!(is_commonly_breached("password"));
        assert!(is_commonly_breached("abc123"));
        assert!(!is_commonly_breached("Password"));
        assert!(!is_commonly_breached("password1"));
    }

    #[test]
    fn no_breached_password_is_strong() {
        for pw in BREACHED_PASSWORDS {
            assert!(!is_strong(pw), "{pw} should not pass strength rules");
        }
    }

    #[test]
    fn hash_verify_round_trip() -> Result<(), ServiceError> {
        let h = hash("Correct1!")?;
        assert!(verify("Correct1!", &h)?);
        assert!(!verify("Wrong1!!", &h)?);
        Ok(())
    }

    #[test]
    fn fresh_salt_per_hash() -> Result<(), ServiceError> {
        let a = hash("Correct1!")?;
        let b = hash("Correct1!")?;
        assert_ne!(a, b);
        Ok(())
    }

    #[test]
    fn malformed_stored_hash_is_internal_error() {
        assert!(matches!(verify("anything", "not-a-hash"), Err(ServiceError::Hash(_))));
    }
}
