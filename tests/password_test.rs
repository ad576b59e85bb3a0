//! Tests for password generation through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use termtoys::{PasswordConfig, generate};

/// The documented symbol set, pinned independently of the library.
const SYMBOLS: &str = "!@#$%^&*(){}[]=<>/,.";

fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

#[test]
fn test_requested_length_honored() {
    let mut rng = rand::rng();
    let config = PasswordConfig::new(16, true, true, true);
    let password = generate(&config, &mut rng);
    assert_eq!(password.chars().count(), 16);
}

#[test]
fn test_every_selected_class_present() {
    let mut rng = rand::rng();
    let config = PasswordConfig::new(16, true, true, true);

    for _ in 0..20 {
        let password = generate(&config, &mut rng);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(is_symbol));
        // 16 positions minus 3 guaranteed classes leaves lowercase padding.
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn test_all_classes_off_gives_lowercase_only() {
    let mut rng = rand::rng();
    let config = PasswordConfig::new(12, false, false, false);

    for _ in 0..20 {
        let password = generate(&config, &mut rng);
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn test_zero_length_no_classes_is_empty() {
    let mut rng = rand::rng();
    let config = PasswordConfig::new(0, false, false, false);
    assert_eq!(generate(&config, &mut rng), "");
}

#[test]
fn test_guaranteed_classes_override_short_length() {
    let mut rng = rand::rng();

    // Three selected classes cannot fit in one position; the guarantee
    // wins over the requested length.
    let config = PasswordConfig::new(1, true, true, true);
    let password = generate(&config, &mut rng);
    assert_eq!(password.chars().count(), 3);
    assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    assert!(password.chars().any(|c| c.is_ascii_digit()));
    assert!(password.chars().any(is_symbol));

    let config = PasswordConfig::new(0, true, false, true);
    let password = generate(&config, &mut rng);
    assert_eq!(password.chars().count(), 2);
}

#[test]
fn test_single_class_short_length() {
    let mut rng = rand::rng();
    let config = PasswordConfig::new(1, false, true, false);

    for _ in 0..20 {
        let password = generate(&config, &mut rng);
        assert_eq!(password.chars().count(), 1);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_symbols_come_from_documented_set() {
    let mut rng = rand::rng();
    let config = PasswordConfig::new(1, false, false, true);

    for _ in 0..100 {
        let password = generate(&config, &mut rng);
        assert!(password.chars().all(is_symbol));
    }
}

#[test]
fn test_only_expected_characters_appear() {
    let mut rng = rand::rng();
    let config = PasswordConfig::new(32, true, true, true);

    let password = generate(&config, &mut rng);
    for c in password.chars() {
        assert!(
            c.is_ascii_lowercase() || c.is_ascii_uppercase() || c.is_ascii_digit() || is_symbol(c),
            "unexpected character {c:?}"
        );
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let config = PasswordConfig::new(20, true, true, true);

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);

    assert_eq!(generate(&config, &mut rng_a), generate(&config, &mut rng_b));
}

#[test]
fn test_default_config_length() {
    let mut rng = rand::rng();
    let config = PasswordConfig::default();
    assert_eq!(generate(&config, &mut rng).chars().count(), 16);
}
