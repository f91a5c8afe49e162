use crate::error::ValidationError;
use crate::input;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Length counts UTF-16 code units, so an astral character counts twice.
/// Upper-case means ASCII `A-Z`.
pub fn is_strong_password(password: &str) -> bool {
    let long_enough = password.encode_utf16().count() >= MIN_PASSWORD_LEN;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    long_enough && has_upper && has_special
}

/// Local-only credential check. Any pair passing the syntactic rules is accepted.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if input::trim_form(username).is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if !is_strong_password(password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_examples() {
        assert!(is_strong_password("Ab1!!!"));
        assert!(!is_strong_password("abcdef"));
        assert!(!is_strong_password("Abc!"));
    }

    #[test]
    fn each_rule_is_required() {
        // missing upper-case
        assert!(!is_strong_password("abcde!"));
        // missing special
        assert!(!is_strong_password("Abcdef"));
        // five chars
        assert!(!is_strong_password("Abcd!"));
        assert!(is_strong_password("Abcd\"e"));
        assert!(is_strong_password("PASS<>"));
    }

    #[test]
    fn length_counts_utf16_units() {
        // two astral characters are four units
        assert!(is_strong_password("A!\u{1F600}\u{1F600}"));
        assert!(!is_strong_password("A!\u{1F600}"));
        assert!(!is_strong_password("A!éé"));
    }

    #[test]
    fn bom_only_username_is_empty() {
        assert_eq!(
            validate_credentials("\u{feff} ", "Ab1!!!"),
            Err(ValidationError::EmptyUsername)
        );
    }

    #[test]
    fn non_ascii_upper_does_not_count() {
        assert!(!is_strong_password("Ébcde!"));
        assert!(is_strong_password("Ébcde!X"));
    }

    #[test]
    fn checks_short_circuit_in_order() {
        assert_eq!(
            validate_credentials("   ", ""),
            Err(ValidationError::EmptyUsername)
        );
        assert_eq!(
            validate_credentials("ada", ""),
            Err(ValidationError::EmptyPassword)
        );
        assert_eq!(
            validate_credentials("ada", "weak"),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(validate_credentials(" ada ", "Ab1!!!"), Ok(()));
    }

    #[test]
    fn whitespace_password_is_not_empty() {
        assert_eq!(
            validate_credentials("ada", "   "),
            Err(ValidationError::WeakPassword)
        );
    }
}
