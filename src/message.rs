//! Notification text

use crate::models::QualifyingPeriod;

/// First line of every alert
pub const HEADER: &str = "☀️  Great bike weather coming up! 🚲";
/// Last line of every alert
pub const CALL_TO_ACTION: &str = "Make a calendar entry and get out there!";
/// Printed instead of notifying when nothing qualifies
pub const NO_TIMES_FOUND: &str = "😭 no times found!";

/// Render one line for a bike window
#[must_use]
pub fn format_period_line(period: &QualifyingPeriod) -> String {
    format!("🚴 {period}")
}

/// Build the push notification body: header, one line per window in order,
/// then the call to action.
#[must_use]
pub fn format_message(periods: &[QualifyingPeriod]) -> String {
    let mut lines = Vec::with_capacity(periods.len() + 2);
    lines.push(HEADER.to_string());
    lines.extend(periods.iter().map(format_period_line));
    lines.push(CALL_TO_ACTION.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, end: &str, precip: f64) -> QualifyingPeriod {
        QualifyingPeriod {
            start_time: start.to_string(),
            end_time: end.to_string(),
            temperature: 70,
            precipitation_probability: precip,
            max_wind_speed: 10,
        }
    }

    #[test]
    fn test_message_layout() {
        let message = format_message(&[period(
            "2024-05-01T10:00:00-04:00",
            "2024-05-01T11:00:00-04:00",
            0.1,
        )]);

        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            "🚴 Wednesday, May 01 10:00AM - 11:00AM Temp 70 F Precipitation 10% Wind Speed 10 mph"
        );
        assert_eq!(lines[2], CALL_TO_ACTION);
    }

    #[test]
    fn test_one_line_per_period_in_order() {
        let periods = vec![
            period("A-start", "A-end", 0.0),
            period("B-start", "B-end", 0.25),
            period("C-start", "C-end", 0.07),
        ];
        let message = format_message(&periods);
        let body: Vec<&str> = message.lines().skip(1).take(periods.len()).collect();

        assert_eq!(body.len(), 3);
        assert!(body[0].contains("A-start - A-end") && body[0].contains("Precipitation 0%"));
        assert!(body[1].contains("B-start - B-end") && body[1].contains("Precipitation 25%"));
        assert!(body[2].contains("C-start - C-end") && body[2].contains("Precipitation 7%"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let periods = vec![period("s", "e", 0.2)];
        assert_eq!(format_message(&periods), format_message(&periods));
    }
}
