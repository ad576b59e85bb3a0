//! Password assembly.

use super::charset;
use super::config::PasswordConfig;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Generates a password from the given settings.
///
/// Every selected class contributes at least one character, so the
/// result can exceed `length` when more classes are selected than the
/// length allows. Remaining positions are filled with lowercase
/// letters, then the whole buffer is shuffled so the guaranteed
/// characters do not cluster at the front.
///
/// The password itself is never logged.
#[instrument(skip(rng))]
pub fn generate<R: Rng + ?Sized>(config: &PasswordConfig, rng: &mut R) -> String {
    let mut chars: Vec<char> = Vec::with_capacity(*config.length());

    if *config.uppercase() {
        chars.push(charset::random_upper(rng));
    }
    if *config.numbers() {
        chars.push(charset::random_digit(rng));
    }
    if *config.symbols() {
        chars.push(charset::random_symbol(rng));
    }

    while chars.len() < *config.length() {
        chars.push(charset::random_lower(rng));
    }

    chars.shuffle(rng);

    debug!(length = chars.len(), "Password generated");
    chars.into_iter().collect()
}
