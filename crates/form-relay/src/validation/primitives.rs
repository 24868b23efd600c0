//! Single-value checks shared by every form schema.
//!
//! Callers pass values that are already trimmed. Format checks answer with a plain
//! `bool`; checks whose failure message depends on the rule that tripped return
//! `Result<_, String>` carrying the message shown to the submitter.

use std::borrow::Cow;
use std::num::IntErrorKind;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Accepted date layouts, tried in order.
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

pub const INVALID_DATE_FORMAT: &str = "Invalid date format";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

fn zip_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip pattern compiles"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone pattern compiles"))
}

/// Digit layout of the accepted date formats: four-digit years, one- or two-digit
/// months and days, no signs.
fn date_shape_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}|[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}|[0-9]{4}/[0-9]{1,2}/[0-9]{1,2})$",
        )
        .expect("date shape pattern compiles")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

pub fn is_valid_zip_code(value: &str) -> bool {
    zip_code_pattern().is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    phone_pattern().is_match(value.trim())
}

/// Blank is valid. Otherwise the value gets an `https://` prefix when it has no
/// scheme and must then carry an http(s) scheme and a non-empty host.
pub fn is_valid_website(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("https://{trimmed}"))
    };

    match split_authority(&candidate) {
        Some((scheme, host)) => matches!(scheme, "http" | "https") && !host.is_empty(),
        None => false,
    }
}

/// Split `scheme://authority/...` into scheme and authority.
fn split_authority(url: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];

    // An unbalanced IPv6 bracket makes the whole URL unparseable.
    if authority.contains('[') != authority.contains(']') {
        return None;
    }

    Some((scheme, authority))
}

/// Parse the first matching layout from [`DATE_FORMATS`].
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !date_shape_pattern().is_match(value) {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parse `value` and require that it does not fall before `today`.
pub fn check_date_not_past(
    value: &str,
    today: NaiveDate,
    display_name: &str,
) -> Result<NaiveDate, String> {
    let date = parse_date(value).ok_or_else(|| INVALID_DATE_FORMAT.to_string())?;
    if date < today {
        return Err(format!("{display_name} must be in the future"));
    }
    Ok(date)
}

/// Base-10 integer within `min..=max` (no upper bound when `max` is `None`).
pub fn check_integer(
    value: &str,
    display_name: &str,
    min: i64,
    max: Option<i64>,
) -> Result<i64, String> {
    if value.trim().is_empty() {
        return Err(format!("{display_name} is required"));
    }

    let digits = match strip_digit_separators(value) {
        Some(digits) => digits,
        None => return Err(format!("{display_name} must be a valid number")),
    };

    let number = match digits.parse::<i64>() {
        Ok(number) => number,
        Err(err) => match (err.kind(), max) {
            (IntErrorKind::PosOverflow, Some(max)) => {
                return Err(format!("{display_name} must not exceed {max}"))
            }
            (IntErrorKind::PosOverflow, None) => i64::MAX,
            (IntErrorKind::NegOverflow, _) => {
                return Err(format!("{display_name} must be at least {min}"))
            }
            _ => return Err(format!("{display_name} must be a valid number")),
        },
    };

    if number < min {
        return Err(format!("{display_name} must be at least {min}"));
    }
    if let Some(max) = max {
        if number > max {
            return Err(format!("{display_name} must not exceed {max}"));
        }
    }

    Ok(number)
}

/// Drop single `_` separators between digit groups (`1_000` reads as `1000`).
/// Leading, trailing or doubled underscores make the value unreadable.
fn strip_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }

    let (sign, body) = match value.strip_prefix(['+', '-']) {
        Some(rest) => (&value[..1], rest),
        None => ("", value),
    };
    let grouped = body
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|byte| byte.is_ascii_digit()));

    grouped.then(|| Cow::Owned(format!("{sign}{}", body.replace('_', ""))))
}

/// Required-ness and a maximum length counted in characters.
pub fn check_length(
    value: &str,
    display_name: &str,
    required: bool,
    max_length: usize,
) -> Result<(), String> {
    if required && value.trim().is_empty() {
        return Err(format!("{display_name} is required"));
    }

    if value.chars().count() > max_length {
        return Err(format!(
            "{display_name} must not exceed {max_length} characters"
        ));
    }

    Ok(())
}

/// Exact membership in `allowed`; `case_insensitive` lowercases the value first.
pub fn check_membership(
    value: &str,
    display_name: &str,
    allowed: &[&str],
    case_insensitive: bool,
) -> Result<(), String> {
    let candidate = if case_insensitive {
        Cow::Owned(value.to_lowercase())
    } else {
        Cow::Borrowed(value)
    };

    if allowed.iter().any(|option| *option == candidate) {
        Ok(())
    } else {
        Err(format!(
            "{display_name} must be one of: {}",
            allowed.join(", ")
        ))
    }
}
