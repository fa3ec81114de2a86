//! Date labels for project cards.

use chrono::NaiveDate;

/// Format an ISO date (`2024-03-15`) as `Mar 2024`.
///
/// Empty input yields an empty label; anything unparsable is shown as is.
pub fn format_month_year(iso: &str) -> String {
    let iso = iso.trim();
    if iso.is_empty() {
        return String::new();
    }
    let date_part = iso.split('T').next().unwrap_or(iso);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year("2024-03-15"), "Mar 2024");
        assert_eq!(format_month_year("2023-12-01T10:00:00Z"), "Dec 2023");
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!(format_month_year(""), "");
        assert_eq!(format_month_year("   "), "");
        assert_eq!(format_month_year("soon"), "soon");
    }
}
