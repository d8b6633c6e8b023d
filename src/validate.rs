//! Form checks applied before anything reaches the address book.
//!
//! Messages are user-facing and printed verbatim.

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,

    #[error("Please use a different name.")]
    NameTaken,

    #[error("Invalid phone number(at least 12 digits).")]
    PhoneLength,

    #[error("Invalid phone number(only numbers allowed).")]
    PhoneDigits,

    #[error("Invalid email address.")]
    Email,

    #[error("Enter the name of contact")]
    EmptySearch,

    #[error("Invalid data(only numbers allowed).")]
    PeriodDigits,

    #[error("Period cannot be more than {max}")]
    PeriodTooLong { max: u64 },
}

/// Number of characters a phone number must have.
pub const PHONE_LEN: usize = 12;

/// Longest birthday window a user may ask for.
pub const MAX_PERIOD: u64 = 365;

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

pub fn validate_phone(number: &str) -> Result<(), ValidationError> {
    if number.chars().count() != PHONE_LEN {
        return Err(ValidationError::PhoneLength);
    }
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PhoneDigits);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    validate_required(email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::Email),
    }
}

/// Returns the trimmed query, or [`ValidationError::EmptySearch`].
pub fn validate_search(query: &str) -> Result<&str, ValidationError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptySearch);
    }
    Ok(query)
}

/// Parses a window length typed by the user.
///
/// Only ASCII digits are accepted. Digit strings too large for `u64` are
/// reported as exceeding `max`.
pub fn parse_period(input: &str, max: u64) -> Result<u64, ValidationError> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PeriodDigits);
    }
    match input.parse::<u64>() {
        Ok(days) if days <= max => Ok(days),
        _ => Err(ValidationError::PeriodTooLong { max }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_matches_title_case_of_first_letter() {
        assert_eq!(capitalize("test"), "Test");
        assert_eq!(capitalize("tEST1"), "Test1");
        assert_eq!(capitalize("ólga"), "Ólga");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn phone_length_checked_before_digits() {
        assert_eq!(validate_phone("380686543423"), Ok(()));
        assert_eq!(validate_phone("0686543423"), Err(ValidationError::PhoneLength));
        assert_eq!(validate_phone("qaswedrftgyh"), Err(ValidationError::PhoneDigits));
        assert_eq!(validate_phone("sasa"), Err(ValidationError::PhoneLength));
    }

    #[test]
    fn email_needs_both_sides_of_at() {
        assert_eq!(validate_email("test@test.ua"), Ok(()));
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("test.ua"), Err(ValidationError::Email));
        assert_eq!(validate_email("@test.ua"), Err(ValidationError::Email));
    }

    #[test]
    fn search_rejects_blank() {
        assert_eq!(validate_search("  "), Err(ValidationError::EmptySearch));
        assert_eq!(validate_search(" Test "), Ok("Test"));
    }

    #[test]
    fn period_parsing() {
        assert_eq!(parse_period("100", MAX_PERIOD), Ok(100));
        assert_eq!(parse_period("0", MAX_PERIOD), Ok(0));
        assert_eq!(parse_period("365", MAX_PERIOD), Ok(365));
        assert_eq!(
            parse_period("sdadad", MAX_PERIOD),
            Err(ValidationError::PeriodDigits)
        );
        assert_eq!(parse_period("", MAX_PERIOD), Err(ValidationError::PeriodDigits));
        assert_eq!(parse_period("-5", MAX_PERIOD), Err(ValidationError::PeriodDigits));
        assert_eq!(
            parse_period("380", MAX_PERIOD),
            Err(ValidationError::PeriodTooLong { max: 365 })
        );
        assert_eq!(
            parse_period("99999999999999999999999", MAX_PERIOD),
            Err(ValidationError::PeriodTooLong { max: 365 })
        );
    }

    #[test]
    fn period_message() {
        let err = ValidationError::PeriodTooLong { max: 365 };
        assert_eq!(err.to_string(), "Period cannot be more than 365");
    }
}
