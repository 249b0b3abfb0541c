use std::collections::BTreeSet;

use crate::error::PasswordError;
use crate::generators::charset::{Alphabet, CharacterClass};

/// A validated generation request: positive length, at least one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: BTreeSet<CharacterClass>,
}

impl GenerationRequest {
    /// The class check runs first, so an empty selection is reported
    /// regardless of length.
    pub fn new(
        length: i64,
        classes: impl IntoIterator<Item = CharacterClass>,
    ) -> Result<Self, PasswordError> {
        let classes: BTreeSet<CharacterClass> = classes.into_iter().collect();
        if classes.is_empty() {
            return Err(PasswordError::NoCharacterClassSelected);
        }
        if length <= 0 {
            return Err(PasswordError::InvalidLength(length.to_string()));
        }
        let length =
            usize::try_from(length).map_err(|_| PasswordError::LengthTooLarge(length as u64))?;
        Ok(Self { length, classes })
    }

    pub fn from_flags(
        length: i64,
        letters: bool,
        digits: bool,
        symbols: bool,
    ) -> Result<Self, PasswordError> {
        let flags = [letters, digits, symbols];
        let classes = CharacterClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, selected)| selected.then_some(class));
        Self::new(length, classes)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &BTreeSet<CharacterClass> {
        &self.classes
    }

    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from_classes(&self.classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn rejects_zero_length() {
        let result = GenerationRequest::from_flags(0, true, false, false);
        assert_eq!(result, Err(PasswordError::InvalidLength("0".to_string())));
    }

    #[test]
    fn rejects_negative_length() {
        let result = GenerationRequest::from_flags(-3, false, true, false);
        assert_eq!(result, Err(PasswordError::InvalidLength("-3".to_string())));
    }

    #[test]
    fn rejects_empty_selection() {
        let result = GenerationRequest::from_flags(12, false, false, false);
        assert_eq!(result, Err(PasswordError::NoCharacterClassSelected));
    }

    #[test]
    fn empty_selection_wins_over_zero_length() {
        let result = GenerationRequest::from_flags(0, false, false, false);
        assert_eq!(result, Err(PasswordError::NoCharacterClassSelected));
    }

    #[test]
    fn flags_map_to_classes() {
        let request = GenerationRequest::from_flags(8, true, false, true).unwrap();
        let classes: Vec<_> = request.classes().iter().copied().collect();
        assert_eq!(classes, vec![CharacterClass::Letters, CharacterClass::Symbols]);
        assert_eq!(request.length(), 8);
        assert_eq!(request.alphabet().len(), 52 + 32);
    }

    #[test]
    fn empty_selection_wins_over_negative_length() {
        let result = GenerationRequest::from_flags(-1, false, false, false);
        assert_eq!(result, Err(PasswordError::NoCharacterClassSelected));
    }

    #[quickcheck]
    fn no_class_error_iff_all_flags_false(len: i16, letters: bool, digits: bool, symbols: bool) -> bool {
        let result = GenerationRequest::from_flags(i64::from(len), letters, digits, symbols);
        let no_class = result == Err(PasswordError::NoCharacterClassSelected);
        no_class == !(letters || digits || symbols)
    }

    #[quickcheck]
    fn valid_iff_positive_length_and_some_class(len: i16, letters: bool, digits: bool, symbols: bool) -> bool {
        let result = GenerationRequest::from_flags(i64::from(len), letters, digits, symbols);
        result.is_ok() == (len > 0 && (letters || digits || symbols))
    }
}
