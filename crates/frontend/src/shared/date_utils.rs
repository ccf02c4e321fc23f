use chrono::{DateTime, Utc};

/// Calendar date shown next to a booking, e.g. "Mar 5, 2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Date and time, e.g. "Mar 5, 2024 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "Mar 5, 2024");
        assert_eq!(format_datetime(&dt), "Mar 5, 2024 14:02");
    }
}
