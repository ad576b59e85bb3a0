//! Character classes the generator draws from.

use rand::Rng;

/// Symbols eligible for generated passwords.
const SYMBOLS: [char; 20] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '{', '}', '[', ']', '=', '<', '>', '/', ',',
    '.',
];

/// Draws a random lowercase ASCII letter.
pub(super) fn random_lower<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.random_range(b'a'..=b'z') as char
}

/// Draws a random uppercase ASCII letter.
pub(super) fn random_upper<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.random_range(b'A'..=b'Z') as char
}

/// Draws a random ASCII digit.
pub(super) fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.random_range(b'0'..=b'9') as char
}

/// Draws a random symbol from [`SYMBOLS`].
pub(super) fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> char {
    SYMBOLS[rng.random_range(0..SYMBOLS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_in_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(random_lower(&mut rng).is_ascii_lowercase());
        }
    }

    #[test]
    fn test_upper_in_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(random_upper(&mut rng).is_ascii_uppercase());
        }
    }

    #[test]
    fn test_digit_in_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(random_digit(&mut rng).is_ascii_digit());
        }
    }

    #[test]
    fn test_symbol_from_set() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(SYMBOLS.contains(&random_symbol(&mut rng)));
        }
    }
}
