use std::collections::BTreeSet;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A named, fixed set of ASCII characters.
///
/// Variant order is the order classes are concatenated into an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Letters,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Letters => "letters",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }
}

/// Characters eligible for sampling in one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Concatenates the selected classes in `Letters, Digits, Symbols` order,
    /// each at most once.
    pub fn from_classes(classes: &BTreeSet<CharacterClass>) -> Self {
        let chars = classes
            .iter()
            .flat_map(|class| class.chars().chars())
            .collect();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Estimated entropy of a `length`-character string drawn from this alphabet.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        length as f64 * (self.len() as f64).log2()
    }
}
