//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a job posting date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use nexttui::logic::formatting::format_posted_date;
///
/// let date = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
/// assert_eq!(format_posted_date(date), "Oct 15, 2023");
/// ```
pub fn format_posted_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Years of experience, e.g. "1 year", "5 years"
pub fn format_experience(years: u32) -> String {
    match years {
        0 => "Less than a year".to_string(),
        1 => "1 year".to_string(),
        n => format!("{} years", n),
    }
}

/// Skills joined for a single line
pub fn format_skills(skills: &[String]) -> String {
    skills.join(" · ")
}

/// Unread badge text; counts above 99 are capped
pub fn format_unread_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Truncate to a display width, adding "…" when anything was cut
///
/// Width is measured in terminal columns, so wide characters count double.
///
/// # Examples
/// ```
/// use nexttui::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("hello", 10), "hello");
/// assert_eq!(truncate_to_width("hello world", 8), "hello w…");
/// assert_eq!(truncate_to_width("hello", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// First line of a message body, for previews
pub fn preview_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_posted_date_single_digit_day() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 2).unwrap();
        assert_eq!(format_posted_date(date), "Nov 2, 2023");
    }

    #[test]
    fn test_format_experience() {
        assert_eq!(format_experience(0), "Less than a year");
        assert_eq!(format_experience(1), "1 year");
        assert_eq!(format_experience(7), "7 years");
    }

    #[test]
    fn test_format_skills() {
        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        assert_eq!(format_skills(&skills), "Rust · SQL");
        assert_eq!(format_skills(&[]), "");
    }

    #[test]
    fn test_unread_badge() {
        assert_eq!(format_unread_badge(0), None);
        assert_eq!(format_unread_badge(3).as_deref(), Some("3"));
        assert_eq!(format_unread_badge(250).as_deref(), Some("99+"));
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("abcd", 4), "abcd");
        assert_eq!(truncate_to_width("abcde", 4), "abc…");
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_preview_line() {
        assert_eq!(preview_line("first\nsecond"), "first");
        assert_eq!(preview_line(""), "");
    }
}
