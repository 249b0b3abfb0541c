use rand::Rng;

use crate::error::PasswordError;
use crate::generators::charset::Alphabet;
use crate::generators::request::GenerationRequest;

/// Produces random strings for a validated [`GenerationRequest`].
///
/// [`PasswordGenerator::generate`] draws from `rand::rng()`, a thread-local
/// ChaCha12 generator periodically reseeded from the operating system, which
/// is a cryptographically secure source. Each position is an independent
/// uniform draw, so repeated characters are expected.
pub struct PasswordGenerator {
    length: usize,
    alphabet: Alphabet,
}

impl PasswordGenerator {
    pub fn new(request: &GenerationRequest) -> Self {
        Self {
            length: request.length(),
            alphabet: request.alphabet(),
        }
    }

    pub fn generate(&self) -> Result<String, PasswordError> {
        self.generate_with(&mut rand::rng())
    }

    /// Fails with `LengthTooLarge` when the output buffer cannot be reserved.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<String, PasswordError> {
        let chars = self.alphabet.as_slice();
        let mut password = String::new();
        password
            .try_reserve_exact(self.length)
            .map_err(|_| PasswordError::LengthTooLarge(self.length as u64))?;
        for _ in 0..self.length {
            password.push(chars[rng.random_range(0..chars.len())]);
        }
        Ok(password)
    }
}

/// Generates a `length`-character string from the selected classes.
pub fn generate(
    length: i64,
    include_letters: bool,
    include_digits: bool,
    include_symbols: bool,
) -> Result<String, PasswordError> {
    let request =
        GenerationRequest::from_flags(length, include_letters, include_digits, include_symbols)?;
    PasswordGenerator::new(&request).generate()
}
