//! Display formatting shared by every panel

use chrono::{DateTime, Utc};

/// Compact number with unit suffix: `2.8M`, `156.8K/hour`, `47.3min`
pub fn compact(value: f64, unit: &str) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M{}", value / 1_000_000.0, unit)
    } else if value >= 1_000.0 {
        format!("{:.1}K{}", value / 1_000.0, unit)
    } else {
        format!("{}{}", value, unit)
    }
}

/// Millions with one decimal and an `M` suffix, as used on view counts
pub fn millions(value: f64) -> String {
    format!("{:.1}M", value / 1_000_000.0)
}

/// Signed change badge: `+1.2%`, `-0.4%`, `0.0%`
pub fn signed_percent(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.1}%", change)
    } else {
        format!("{:.1}%", change)
    }
}

/// Integer with thousands separators
pub fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Wall-clock time for the header and feed
pub fn clock_time(time: DateTime<Utc>) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_compact_thresholds() {
        assert_eq!(compact(2_847_392.0, ""), "2.8M");
        assert_eq!(compact(1_000_000.0, ""), "1.0M");
        assert_eq!(compact(156_789.0, "/hour"), "156.8K/hour");
        assert_eq!(compact(1_000.0, " hrs"), "1.0K hrs");
        assert_eq!(compact(999.0, ""), "999");
        assert_eq!(compact(47.3, "min"), "47.3min");
        assert_eq!(compact(190.0, " countries"), "190 countries");
        assert_eq!(compact(87.3, "%"), "87.3%");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(1.234), "+1.2%");
        assert_eq!(signed_percent(-0.44), "-0.4%");
        assert_eq!(signed_percent(0.0), "0.0%");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(26), "26");
        assert_eq!(grouped(1_000), "1,000");
        assert_eq!(grouped(15_847_392), "15,847,392");
    }

    #[test]
    fn test_millions_and_clock() {
        assert_eq!(millions(17_260_000.0), "17.3M");
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 9, 5, 7).unwrap();
        assert_eq!(clock_time(t), "09:05:07");
    }
}
