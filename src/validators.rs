//! Input validation for DataWhisper forms
//!
//! Every validator returns `Err` with the exact message shown next to the
//! offending field. Nothing here trims input silently: a value either passes
//! as typed or the user sees why it did not.

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum sleep hours in a single day
pub const MAX_SLEEP_HOURS: f64 = 24.0;

/// Validates an email typed into the "add recipient" box.
///
/// This is deliberately loose: anything non-empty containing `@` passes.
///
/// # Examples
///
/// ```
/// use datawhisper::validators::validate_contact_email;
///
/// assert!(validate_contact_email("pat@example.com").is_ok());
/// assert!(validate_contact_email("pat.example.com").is_err());
/// ```
///
/// # Errors
///
/// Returns `Err` if the input is empty or lacks `@`.
pub fn validate_contact_email(input: &str) -> Result<(), String> {
    if input.is_empty() || !input.contains('@') {
        Err("Please enter a valid email address.".to_string())
    } else {
        Ok(())
    }
}

/// Validates an email for the login form.
///
/// Requires `local@domain.tld`: exactly one `@`, a non-empty local part, a
/// domain with at least one dot not at either end, and no whitespace.
///
/// # Errors
///
/// Returns `Err` describing the first violated rule.
pub fn validate_email(input: &str) -> Result<(), String> {
    const INVALID: &str = "Please enter a valid email address";

    if input.is_empty() {
        return Err("Email is required".to_string());
    }
    if input.chars().any(char::is_whitespace) {
        return Err(INVALID.to_string());
    }
    let Some((local, domain)) = input.split_once('@') else {
        return Err(INVALID.to_string());
    };
    if local.is_empty() || domain.contains('@') {
        return Err(INVALID.to_string());
    }
    let valid_domain = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");
    if valid_domain {
        Ok(())
    } else {
        Err(INVALID.to_string())
    }
}

/// Validates a login password.
///
/// # Errors
///
/// Returns `Err` if shorter than [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(input: &str) -> Result<(), String> {
    if input.chars().count() < MIN_PASSWORD_LEN {
        Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ))
    } else {
        Ok(())
    }
}

/// Validates an uploaded file name.
///
/// # Errors
///
/// Returns `Err` unless the name ends in `.csv` (any case) with a non-empty stem.
pub fn validate_csv_name(name: &str) -> Result<(), String> {
    let lower = name.to_lowercase();
    match lower.strip_suffix(".csv") {
        Some(stem) if !stem.is_empty() => Ok(()),
        _ => Err("Please upload a CSV file.".to_string()),
    }
}

/// Validates the manual-entry date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `Err` if empty or not a calendar date.
pub fn validate_date(input: &str) -> Result<chrono::NaiveDate, String> {
    if input.is_empty() {
        return Err("Date is required".to_string());
    }
    chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| "Date must be in YYYY-MM-DD format".to_string())
}

/// Validates a daily step count.
///
/// # Errors
///
/// Returns `Err` if not a whole number or negative.
pub fn validate_steps(input: &str) -> Result<u32, String> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| "Steps must be a whole number".to_string())?;
    u32::try_from(value).map_err(|_| "Steps must be a positive number".to_string())
}

/// Validates hours slept.
///
/// # Errors
///
/// Returns `Err` if not a number, negative, or above [`MAX_SLEEP_HOURS`].
pub fn validate_sleep_hours(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Sleep hours must be a number".to_string())?;
    if !value.is_finite() || value < 0.0 {
        Err("Sleep hours must be a positive number".to_string())
    } else if value > MAX_SLEEP_HOURS {
        Err("Sleep hours cannot exceed 24".to_string())
    } else {
        Ok(value)
    }
}

/// Validates the free-text mood field.
///
/// # Errors
///
/// Returns `Err` if empty.
pub fn validate_mood(input: &str) -> Result<String, String> {
    if input.is_empty() {
        Err("Mood is required".to_string())
    } else {
        Ok(input.to_string())
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_contact_email_accepts_anything_with_at(prefix in "\\PC*", suffix in "\\PC*") {
            let input = format!("{prefix}@{suffix}");
            prop_assert!(validate_contact_email(&input).is_ok());
        }

        #[test]
        fn test_contact_email_rejects_without_at(input in "[^@]*") {
            prop_assert!(validate_contact_email(&input).is_err());
        }

        #[test]
        fn test_login_email_accepts_simple_addresses(
            local in "[a-z0-9]{1,12}",
            domain in "[a-z]{1,12}",
            tld in "[a-z]{2,4}",
        ) {
            let input = format!("{local}@{domain}.{tld}");
            prop_assert!(validate_email(&input).is_ok());
        }

        #[test]
        fn test_sleep_hours_range(hours in -48.0f64..48.0) {
            let result = validate_sleep_hours(&hours.to_string());
            if (0.0..=MAX_SLEEP_HOURS).contains(&hours) {
                prop_assert_eq!(result, Ok(hours));
            } else {
                prop_assert!(result.is_err());
            }
        }

        #[test]
        fn test_steps_roundtrip(steps in any::<u32>()) {
            prop_assert_eq!(validate_steps(&steps.to_string()), Ok(steps));
        }
    }
}
