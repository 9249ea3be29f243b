use log::debug;
use rand::{rngs::OsRng, CryptoRng, Rng};
use zeroize::Zeroizing;

use crate::charset::CharacterClasses;
use crate::error::GeneratorError;

/// Draws `length` characters independently and uniformly from the alphabet of
/// the enabled classes, using the operating system's secure random source.
///
/// There is no guarantee that every enabled class shows up in the result.
pub fn random_password(
    length: usize,
    classes: &CharacterClasses,
) -> Result<Zeroizing<String>, GeneratorError> {
    if length == 0 {
        return Err(GeneratorError::InvalidLength);
    }

    let alphabet = classes.alphabet();
    if alphabet.is_empty() {
        return Err(GeneratorError::NoCharacterClass);
    }

    debug!(
        "generating password of length {} from alphabet of {} characters",
        length,
        alphabet.len()
    );

    Ok(sample(&alphabet, length, &mut OsRng))
}

fn sample<R: Rng + CryptoRng>(alphabet: &[char], length: usize, rng: &mut R) -> Zeroizing<String> {
    // Every alphabet character is ascii, so this never reallocates
    let mut password = Zeroizing::new(String::with_capacity(length));

    for _ in 0..length {
        let index = rng.gen_range(0..alphabet.len());
        password.push(alphabet[index]);
    }

    password
}

#[cfg(test)]
mod test {
    use super::random_password;
    use crate::charset::{CharacterClass, CharacterClasses};
    use crate::error::GeneratorError;

    #[test]
    fn test_lowercase_only() {
        let classes = CharacterClasses::none().enable(CharacterClass::Lowercase);
        let password = random_password(12, &classes).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_length_and_membership() {
        let selections = [
            CharacterClasses::all(),
            CharacterClasses::none().enable(CharacterClass::Uppercase),
            CharacterClasses::none().enable(CharacterClass::Digits),
            CharacterClasses::none().enable(CharacterClass::Special),
            CharacterClasses::none()
                .enable(CharacterClass::Digits)
                .enable(CharacterClass::Uppercase),
        ];

        for classes in selections {
            let alphabet = classes.alphabet();
            for length in [1, 7, 8, 12, 64, 500] {
                let password = random_password(length, &classes).unwrap();
                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|c| alphabet.contains(&c)));
            }
        }
    }

    #[test]
    fn test_not_reproducible() {
        let classes = CharacterClasses::all();
        let a = random_password(64, &classes).unwrap();
        let b = random_password(64, &classes).unwrap();
        assert_ne!(*a, *b);
    }

    #[test]
    fn test_invalid_input() {
        let result = random_password(0, &CharacterClasses::all());
        assert_eq!(result.unwrap_err(), GeneratorError::InvalidLength);

        let result = random_password(8, &CharacterClasses::none());
        assert_eq!(result.unwrap_err(), GeneratorError::NoCharacterClass);
    }

    #[test]
    fn test_uniform_distribution() {
        let classes = CharacterClasses::none().enable(CharacterClass::Digits);
        let alphabet = classes.alphabet();
        let samples = 100_000;

        let password = random_password(samples, &classes).unwrap();
        let mut counts = vec![0usize; alphabet.len()];
        for c in password.chars() {
            let index = alphabet.iter().position(|a| *a == c).unwrap();
            counts[index] += 1;
        }

        let expected = samples as f64 / alphabet.len() as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|count| {
                let diff = *count as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // 9 degrees of freedom, p < 0.00001
        println!("chi square {}", chi_square);
        assert!(chi_square < 40.0);
    }
}
