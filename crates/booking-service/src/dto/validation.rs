//! Canonical field validators
//!
//! Single source of truth for every field rule used across request DTOs.
//! Each function has the `validator` crate's custom-validator signature so
//! DTOs attach them with `#[validate(custom(function = ...))]`.

use validator::ValidationError;

/// Display name: 2 to 10 characters, letters and digits only, and the first
/// character must not be a digit.
pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let count = name.chars().count();
    if !(2..=10).contains(&count) {
        return Err(ValidationError::new("display_name_length"));
    }

    let mut chars = name.chars();
    let first = chars.next().expect("length checked above");
    if !first.is_alphabetic() {
        return Err(ValidationError::new("display_name_leading_char"));
    }

    if name.chars().any(|c| !c.is_alphanumeric()) {
        return Err(ValidationError::new("display_name_charset"));
    }

    Ok(())
}

/// Password: 8 to 16 characters with at least one uppercase letter, one
/// lowercase letter, and one digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if !(8..=16).contains(&len) {
        return Err(ValidationError::new("password_length"));
    }
    if !password.chars().any(char::is_uppercase)
        || !password.chars().any(char::is_lowercase)
        || !password.chars().any(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::new("password_charset"));
    }
    Ok(())
}

/// URL fields: absolute http/https URL with a host.
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(input).map_err(|_| ValidationError::new("url_format"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::new("url_scheme"));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::new("url_host"));
    }
    Ok(())
}

/// Map an english month name to its 1-based number.
pub fn parse_month(input: &str) -> Option<u32> {
    let month = match input.to_ascii_lowercase().as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_accepts_plain_names() {
        assert!(validate_display_name("amber").is_ok());
        assert!(validate_display_name("ab").is_ok());
        assert!(validate_display_name("coach9").is_ok());
    }

    #[test]
    fn test_display_name_rejects_bad_shapes() {
        assert!(validate_display_name("a").is_err());
        assert!(validate_display_name("averylongname").is_err());
        assert!(validate_display_name("9lives").is_err());
        assert!(validate_display_name("two words").is_err());
        assert!(validate_display_name("semi;colon").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("SecurePass1").is_ok());
        assert!(validate_password("short1A").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("ALLUPPERCASE1").is_err());
        assert!(validate_password("NoDigitsHere").is_err());
        assert!(validate_password("WayTooLongPassword123").is_err());
    }

    #[test]
    fn test_http_url() {
        assert!(validate_http_url("https://example.com/meet/1").is_ok());
        assert!(validate_http_url("http://example.com").is_ok());
        assert!(validate_http_url("ftp://example.com").is_err());
        assert!(validate_http_url("not a url").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("january"), Some(1));
        assert_eq!(parse_month("December"), Some(12));
        assert_eq!(parse_month("smarch"), None);
    }
}
