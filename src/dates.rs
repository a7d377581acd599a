use time::{macros::format_description, Date, Duration, OffsetDateTime, UtcOffset};

/// Calendar date "now" at the configured offset.
pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// Strict `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(s, &format).ok()
}

/// First day of the inclusive window of `days` days ending at `end`.
pub fn window_start(end: Date, days: u32) -> Date {
    end - Duration::days(i64::from(days.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_iso_calendar_dates_only() {
        assert_eq!(parse_date("2024-02-29"), Some(date!(2024 - 02 - 29)));
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("2024/02/01"), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn window_includes_end_day() {
        let end = date!(2024 - 03 - 07);
        assert_eq!(window_start(end, 7), date!(2024 - 03 - 01));
        assert_eq!(window_start(end, 1), end);
        assert_eq!(window_start(end, 30), date!(2024 - 02 - 07));
    }
}
