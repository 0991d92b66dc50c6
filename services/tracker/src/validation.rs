//! Input validation utilities

use crate::models::exercise::DurationInput;

/// Default number of log entries returned when no limit is given
pub const DEFAULT_LOG_LIMIT: usize = 500;

/// Validate and normalise a username
pub fn validate_username(username: Option<&str>) -> Result<String, String> {
    let username = username.map(str::trim).unwrap_or_default();

    if username.is_empty() {
        return Err("Username is required".to_string());
    }

    Ok(username.to_string())
}

/// Validate an exercise description
pub fn validate_description(description: Option<&str>) -> Result<String, String> {
    let description = description.map(str::trim).unwrap_or_default();

    if description.is_empty() {
        return Err("Description is required".to_string());
    }

    Ok(description.to_string())
}

/// Coerce a duration to whole minutes
pub fn validate_duration(duration: Option<&DurationInput>) -> Result<i64, String> {
    let minutes = match duration {
        None => return Err("Duration is required".to_string()),
        Some(DurationInput::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_number)),
        Some(DurationInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err("Duration is required".to_string());
            }
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
        }
    };

    match minutes {
        Some(minutes) if minutes >= 0 => Ok(minutes),
        Some(_) => Err("Duration must not be negative".to_string()),
        None => Err("Duration must be a whole number of minutes".to_string()),
    }
}

fn whole_number(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Resolve the `limit` query parameter
///
/// Like `parseInt`, only the leading integer is read (`"1.5"` is 1).
/// Absent or unparseable limits fall back to [`DEFAULT_LOG_LIMIT`];
/// zero and negative limits mean no cap and resolve to `None`.
pub fn resolve_limit(limit: Option<&str>) -> Option<usize> {
    let Some(value) = limit.and_then(leading_integer) else {
        return Some(DEFAULT_LOG_LIMIT);
    };

    if value <= 0 {
        None
    } else {
        Some(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

/// Leading optionally-signed integer of `input`, ignoring what follows
fn leading_integer(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let sign_len = usize::from(input.starts_with(['+', '-']));
    let digits_len = input[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    let number = &input[..sign_len + digits_len];
    number.parse::<i64>().ok().or_else(|| {
        // Out of range: saturate in the direction of the sign
        Some(if number.starts_with('-') { i64::MIN } else { i64::MAX })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: serde_json::Value) -> DurationInput {
        match value {
            serde_json::Value::Number(n) => DurationInput::Number(n),
            other => panic!("not a number: {other}"),
        }
    }

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username(Some("alice")), Ok("alice".to_string()));
        assert_eq!(validate_username(Some("  bob ")), Ok("bob".to_string()));
        assert!(validate_username(None).is_err());
        assert!(validate_username(Some("")).is_err());
        assert!(validate_username(Some("   ")).is_err());
    }

    #[test]
    fn test_long_usernames_are_accepted() {
        let long = "x".repeat(500);
        assert_eq!(validate_username(Some(&long)), Ok(long.clone()));
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description(Some("run")), Ok("run".to_string()));
        assert!(validate_description(None).is_err());
        assert!(validate_description(Some(" ")).is_err());
    }

    #[test]
    fn test_validate_duration_numbers() {
        assert_eq!(validate_duration(Some(&number(serde_json::json!(30)))), Ok(30));
        assert_eq!(validate_duration(Some(&number(serde_json::json!(45.0)))), Ok(45));
        assert!(validate_duration(Some(&number(serde_json::json!(12.5)))).is_err());
        assert!(validate_duration(Some(&number(serde_json::json!(-1)))).is_err());
    }

    #[test]
    fn test_validate_duration_text() {
        let text = |s: &str| DurationInput::Text(s.to_string());
        assert_eq!(validate_duration(Some(&text("30"))), Ok(30));
        assert_eq!(validate_duration(Some(&text(" 15 "))), Ok(15));
        assert_eq!(validate_duration(Some(&text("60.0"))), Ok(60));
        assert_eq!(validate_duration(Some(&text("0"))), Ok(0));
        assert!(validate_duration(Some(&text(""))).is_err());
        assert!(validate_duration(Some(&text("abc"))).is_err());
        assert!(validate_duration(Some(&text("NaN"))).is_err());
        assert!(validate_duration(None).is_err());
    }

    #[test]
    fn test_resolve_limit() {
        assert_eq!(resolve_limit(None), Some(DEFAULT_LOG_LIMIT));
        assert_eq!(resolve_limit(Some("")), Some(DEFAULT_LOG_LIMIT));
        assert_eq!(resolve_limit(Some("abc")), Some(DEFAULT_LOG_LIMIT));
        assert_eq!(resolve_limit(Some("-")), Some(DEFAULT_LOG_LIMIT));
        assert_eq!(resolve_limit(Some("1")), Some(1));
        assert_eq!(resolve_limit(Some(" 7 ")), Some(7));
        assert_eq!(resolve_limit(Some("+3")), Some(3));
        assert_eq!(resolve_limit(Some("1000")), Some(1000));
    }

    #[test]
    fn test_resolve_limit_reads_leading_integer() {
        assert_eq!(resolve_limit(Some("1.5")), Some(1));
        assert_eq!(resolve_limit(Some("2abc")), Some(2));
        assert_eq!(resolve_limit(Some("99999999999999999999999")), Some(usize::MAX));
    }

    #[test]
    fn test_resolve_limit_zero_or_negative_means_no_cap() {
        assert_eq!(resolve_limit(Some("0")), None);
        assert_eq!(resolve_limit(Some("-5")), None);
        assert_eq!(resolve_limit(Some("-0.5")), None);
        assert_eq!(resolve_limit(Some("-99999999999999999999999")), None);
    }
}
