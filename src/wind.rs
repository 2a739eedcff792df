//! Wind speed text parsing
//!
//! The forecast reports wind as free text, either a range (`"5 to 10 mph"`)
//! or a single value (`"10 mph"`). Anything else parses as calm.

use crate::models::WindRange;

/// Parse a wind speed string into a mph range.
///
/// Only the two exact forms above are recognized; other input yields
/// `{low: 0, high: 0}` rather than an error.
#[must_use]
pub fn parse_wind_speed(text: &str) -> WindRange {
    parse_known_format(text).unwrap_or_default()
}

fn parse_known_format(text: &str) -> Option<WindRange> {
    let speeds = text.strip_suffix(" mph")?;

    match speeds.split_once(" to ") {
        Some((low, high)) => Some(WindRange {
            low: parse_mph(low)?,
            high: parse_mph(high)?,
        }),
        None => {
            let speed = parse_mph(speeds)?;
            Some(WindRange {
                low: speed,
                high: speed,
            })
        }
    }
}

fn parse_mph(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail past the digit check; an absurd speed is still windy
    Some(part.parse().unwrap_or(u32::MAX))
}
