//! Input format rules shared by the login and profile forms.
//!
//! These are pure string checks; everything about presentation lives in the
//! page components and [`crate::form`].

/// Validates an Iranian mobile number.
///
/// Whitespace and hyphens are ignored. The remainder must be all digits and
/// either `09` followed by nine digits (11 total) or `9` followed by nine
/// digits (10 total).
pub fn validate_phone(raw: &str) -> bool {
    let digits: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    if digits.starts_with('0') {
        return digits.len() == 11 && digits.starts_with("09");
    }
    if digits.starts_with('9') {
        return digits.len() == 10;
    }
    false
}

/// At least 8 characters, alphanumeric only, with at least one letter and
/// one digit.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// `local@domain.tld` shape: one `@`, no whitespace anywhere, and a dot in
/// the domain with non-empty text on both sides.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    clean(local) && clean(host) && clean(tld)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_both_national_shapes() {
        assert!(validate_phone("09123456789"));
        assert!(validate_phone("9123456789"));
        assert!(validate_phone("0912 345-6789"));
    }

    #[test]
    fn phone_rejects_bad_shapes() {
        assert!(!validate_phone(""));
        assert!(!validate_phone("123456789"));
        assert!(!validate_phone("091234567890"));
        assert!(!validate_phone("09abc456789"));
        assert!(!validate_phone("0812345678901"));
        // Starts with 0 but not 09.
        assert!(!validate_phone("08123456789"));
    }

    #[test]
    fn password_needs_length_letters_and_digits() {
        assert!(validate_password("abc12345"));
        assert!(!validate_password("abcdefgh"));
        assert!(!validate_password("12345678"));
        assert!(!validate_password("abc123"));
        assert!(!validate_password("abc12345!"));
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@mail.example.com"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b c.com"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@.co"));
        assert!(!validate_email("a@b."));
    }
}
