use crate::error::PasswordError;

/// Parses a length from external input.
///
/// Only text that is not an integer is rejected here. Zero and negative
/// values are passed on so that [`GenerationRequest`](crate::generators::GenerationRequest)
/// can report a missing character class first. Lengths too large to allocate
/// fail later with `LengthTooLarge` instead of aborting the process.
pub fn parse_length(text: &str) -> Result<i64, PasswordError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| PasswordError::InvalidLength(trimmed.to_string()))
}

/// Only `y` (any case) counts as yes.
pub fn parse_yes_no(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn parses_integers() {
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length(" 8\n"), Ok(8));
        assert_eq!(parse_length("0"), Ok(0));
        assert_eq!(parse_length("-3"), Ok(-3));
    }

    #[test]
    fn rejects_non_numeric_lengths() {
        assert_eq!(
            parse_length("twelve"),
            Err(PasswordError::InvalidLength("twelve".to_string()))
        );
        assert!(parse_length("").is_err());
        assert!(parse_length("1.5").is_err());
        assert!(parse_length("99999999999999999999").is_err());
    }

    #[quickcheck]
    fn length_parse_round_trips_integers(n: i64) -> bool {
        parse_length(&n.to_string()) == Ok(n)
    }

    #[test]
    fn yes_no_answers() {
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no("Y\n"));
        assert!(!parse_yes_no("n"));
        assert!(!parse_yes_no("yes"));
        assert!(!parse_yes_no(""));
    }
}
