//! Input validation utilities
//!
//! Custom validators used alongside the `validator` crate's derive macros.

/// Default weekly workout target when the setting is missing or unparseable
pub const DEFAULT_WORKOUTS_PER_WEEK: u32 = 3;

/// Resolve the raw `workouts_per_week` setting to a usable target.
///
/// The settings page stores this as free text; anything missing or
/// non-numeric falls back to 3, and the result is clamped to [1, 7].
pub fn resolve_workouts_per_week(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_WORKOUTS_PER_WEEK)
        .clamp(1, 7)
}

/// Validate a day-of-week index (0 = Sunday)
pub fn validate_day_index(day: u8) -> Result<(), String> {
    if day > 6 {
        return Err(format!("Day index must be 0-6, got {}", day));
    }
    Ok(())
}

/// Validate workout duration in minutes
pub fn validate_duration_minutes(minutes: i32) -> Result<(), String> {
    if minutes < 0 {
        return Err("Duration cannot be negative".to_string());
    }
    if minutes > 1440 {
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// User-facing label for a profile field, used when the coach or planner
/// reports which fields are missing
pub fn get_field_display_label(field: &str) -> &'static str {
    match field {
        "goal" => "Primary goal",
        "experience_level" => "Experience level",
        "workouts_per_week" => "Workouts per week",
        "weight" => "Current weight",
        "target_weight" => "Target weight",
        "height" => "Height",
        _ => "Field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 3)]
    #[case(Some(""), 3)]
    #[case(Some("abc"), 3)]
    #[case(Some("0"), 1)]
    #[case(Some("1"), 1)]
    #[case(Some("4"), 4)]
    #[case(Some(" 5 "), 5)]
    #[case(Some("7"), 7)]
    #[case(Some("12"), 7)]
    #[case(Some("-2"), 3)]
    fn test_resolve_workouts_per_week(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(resolve_workouts_per_week(raw), expected);
    }

    #[test]
    fn test_day_index_bounds() {
        for day in 0..=6u8 {
            assert!(validate_day_index(day).is_ok());
        }
        assert!(validate_day_index(7).is_err());
    }

    #[test]
    fn test_duration_bounds() {
        assert!(validate_duration_minutes(0).is_ok());
        assert!(validate_duration_minutes(45).is_ok());
        assert!(validate_duration_minutes(-1).is_err());
        assert!(validate_duration_minutes(1441).is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(get_field_display_label("goal"), "Primary goal");
        assert_eq!(
            get_field_display_label("workouts_per_week"),
            "Workouts per week"
        );
        assert_eq!(get_field_display_label("unknown"), "Field");
    }
}
