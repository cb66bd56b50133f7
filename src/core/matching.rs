//! Letter match counting
//!
//! A guess is scored by how many of its letters can be paired with letters of
//! the secret word. The secret is treated as a multiset: each of its letters
//! can be credited at most once, so a guess with repeated letters never gets
//! more matches than the secret actually holds.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Which argument of [`count_matches`] was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guess,
    Secret,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess => write!(f, "guess"),
            Self::Secret => write!(f, "secret word"),
        }
    }
}

/// Error type for malformed match-counting input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("{role} contains invalid character {character:?} at position {position}")]
    InvalidCharacter {
        role: Role,
        character: char,
        position: usize,
    },
}

/// Count the letters `guess` shares with `secret`
///
/// Both arguments must contain only lowercase ASCII letters. Empty strings are
/// valid and score 0. Normalizing case is the caller's job: uppercase input is
/// rejected rather than silently scored.
///
/// # Errors
/// Returns [`MatchError::InvalidCharacter`] naming the first offending
/// character if either argument contains anything other than `a`..=`z`.
///
/// # Examples
/// ```
/// use jotto::core::count_matches;
///
/// assert_eq!(count_matches("bart", "party").unwrap(), 3);
/// // Only one 'a' in "party", so the second 'a' of "algebra" scores nothing
/// assert_eq!(count_matches("algebra", "party").unwrap(), 2);
/// assert!(count_matches("Party", "party").is_err());
/// ```
pub fn count_matches(guess: &str, secret: &str) -> Result<usize, MatchError> {
    validate_letters(guess, Role::Guess)?;
    validate_letters(secret, Role::Secret)?;

    Ok(letter_match_count(guess.as_bytes(), secret.as_bytes()))
}

fn validate_letters(text: &str, role: Role) -> Result<(), MatchError> {
    match text
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_lowercase())
    {
        Some((position, character)) => Err(MatchError::InvalidCharacter {
            role,
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Duplicate-safe match count over already-validated letters
pub(crate) fn letter_match_count(guess: &[u8], secret: &[u8]) -> usize {
    let mut remaining = letter_counts(secret);

    guess
        .iter()
        .filter(|letter| match remaining.get_mut(*letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
        .count()
}

fn letter_counts(letters: &[u8]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for &letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "party";

    #[test]
    fn no_matching_letters() {
        assert_eq!(count_matches("bones", SECRET), Ok(0));
    }

    #[test]
    fn three_matching_letters() {
        // a, r, t match; b does not
        assert_eq!(count_matches("bart", SECRET), Ok(3));
    }

    #[test]
    fn duplicate_letters_in_guess_credited_once() {
        // One 'a' and one 'r'; the second 'a' has nothing left to pair with
        assert_eq!(count_matches("algebra", SECRET), Ok(2));
    }

    #[test]
    fn duplicate_letters_in_both() {
        // "speed" has two e's and so does "erase"
        assert_eq!(count_matches("speed", "erase"), Ok(3));
        // "eerie" has three e's, "erase" only two
        assert_eq!(count_matches("eerie", "erase"), Ok(3));
    }

    #[test]
    fn position_is_irrelevant() {
        assert_eq!(count_matches("ytrap", SECRET), Ok(5));
    }

    #[test]
    fn guess_equal_to_secret_scores_full_length() {
        for word in ["party", "algebra", "aaaaa", "a", "mississippi"] {
            assert_eq!(count_matches(word, word), Ok(word.len()), "{word}");
        }
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(count_matches("", SECRET), Ok(0));
        assert_eq!(count_matches("bart", ""), Ok(0));
        assert_eq!(count_matches("", ""), Ok(0));
    }

    #[test]
    fn count_never_exceeds_either_length() {
        let words = [
            "", "a", "aa", "party", "algebra", "bart", "bones", "train", "sunny", "return",
            "aaaaaaa", "yrtrap",
        ];

        for guess in words {
            for secret in words {
                let count = count_matches(guess, secret).unwrap();
                assert!(
                    count <= guess.len().min(secret.len()),
                    "{guess} vs {secret} scored {count}"
                );
            }
        }
    }

    #[test]
    fn uppercase_guess_rejected() {
        assert_eq!(
            count_matches("Bart", SECRET),
            Err(MatchError::InvalidCharacter {
                role: Role::Guess,
                character: 'B',
                position: 0,
            })
        );
    }

    #[test]
    fn invalid_secret_rejected() {
        assert_eq!(
            count_matches("bart", "par ty"),
            Err(MatchError::InvalidCharacter {
                role: Role::Secret,
                character: ' ',
                position: 3,
            })
        );
    }

    #[test]
    fn non_ascii_rejected() {
        assert!(matches!(
            count_matches("caf\u{e9}", SECRET),
            Err(MatchError::InvalidCharacter {
                role: Role::Guess,
                character: '\u{e9}',
                position: 3,
            })
        ));
    }

    #[test]
    fn error_message_names_argument() {
        let err = count_matches("bart", "p4rty").unwrap_err();
        assert_eq!(
            err.to_string(),
            "secret word contains invalid character '4' at position 1"
        );
    }

    #[test]
    fn letter_counts_tracks_multiplicity() {
        let counts = letter_counts(b"algebra");
        assert_eq!(counts.get(&b'a'), Some(&2));
        assert_eq!(counts.get(&b'l'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }
}
