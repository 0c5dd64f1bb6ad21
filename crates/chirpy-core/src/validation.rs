//! Chirp body validation and redaction.
//!
//! Applied by the facade before a chirp reaches the store; the store itself
//! accepts any body.

use std::collections::HashSet;

use crate::error::ValidationError;

/// Maximum chirp length.
///
/// Counted in Unicode scalar values, not UTF-8 bytes: 140 `é` fit even
/// though they take 280 bytes. Byte-counted limits accept fewer non-ASCII
/// characters than this.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words replaced by [`REDACTED`] in chirp bodies.
pub const DEFAULT_PROFANITY: &[&str] = &["kerfuffle", "sharbert", "fornax"];

/// Replacement for a redacted word.
pub const REDACTED: &str = "****";

/// Check that `body` is at most `max_len` characters long.
pub fn validate_chirp(body: &str, max_len: usize) -> Result<(), ValidationError> {
    let len = body.chars().count();
    if len > max_len {
        return Err(ValidationError::TooLong { len, max: max_len });
    }
    Ok(())
}

/// Replace every space-separated word whose lowercase form is in `words`.
///
/// Matching is exact on the whole word: `Kerfuffle` is redacted,
/// `kerfuffle!` is not. Spacing is preserved.
pub fn redact<S: AsRef<str>>(body: &str, words: &[S]) -> String {
    let banned: HashSet<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
    body.split(' ')
        .map(|word| {
            if banned.contains(&word.to_lowercase()) {
                REDACTED
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_length_limit() {
        assert!(validate_chirp("", MAX_CHIRP_LENGTH).is_ok());
        assert!(validate_chirp(&"a".repeat(140), MAX_CHIRP_LENGTH).is_ok());
        assert_eq!(
            validate_chirp(&"a".repeat(141), MAX_CHIRP_LENGTH),
            Err(ValidationError::TooLong { len: 141, max: 140 })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 140 two-byte characters.
        assert!(validate_chirp(&"é".repeat(140), MAX_CHIRP_LENGTH).is_ok());
        assert_eq!(
            validate_chirp(&"é".repeat(141), MAX_CHIRP_LENGTH),
            Err(ValidationError::TooLong { len: 141, max: 140 })
        );
    }

    #[test]
    fn test_redact_case_insensitive() {
        let cleaned = redact(
            "I had something interesting for breakfast Kerfuffle",
            DEFAULT_PROFANITY,
        );
        assert_eq!(cleaned, "I had something interesting for breakfast ****");
    }

    #[test]
    fn test_redact_ignores_punctuated_words() {
        let cleaned = redact("I hear Mastodon is better than Chirpy. sharbert!", DEFAULT_PROFANITY);
        assert_eq!(cleaned, "I hear Mastodon is better than Chirpy. sharbert!");
    }

    #[test]
    fn test_redact_multiple_and_spacing() {
        let cleaned = redact("fornax  and  FORNAX", DEFAULT_PROFANITY);
        assert_eq!(cleaned, "****  and  ****");
    }

    #[test]
    fn test_redact_custom_words() {
        let words = vec!["Bad".to_string()];
        assert_eq!(redact("a bad word", &words), "a **** word");
    }

    proptest! {
        #[test]
        fn test_redact_keeps_word_count(body in "[a-zA-Z ]{0,80}") {
            let cleaned = redact(&body, DEFAULT_PROFANITY);
            prop_assert_eq!(cleaned.split(' ').count(), body.split(' ').count());
        }

        #[test]
        fn test_redact_without_words_is_identity(body in ".{0,80}") {
            prop_assert_eq!(redact::<&str>(&body, &[]), body);
        }
    }
}
