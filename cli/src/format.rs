//! Display helpers shared by the text report and the TUI.

pub const MISSING: &str = "n/a";

/// Groups digits in thousands: `57000` -> `"57,000"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Capacity rounded to the nearest whole mWh.
pub fn format_mwh(value: Option<f64>) -> String {
    value
        .map(|mwh| {
            let rounded = mwh.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("{}{} mWh", sign, group_thousands(rounded.abs() as u64))
        })
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn format_percent(value: Option<f64>) -> String {
    value
        .map(|p| format!("{:.2}%", p))
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn format_opt<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(57000), "57,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_mwh(Some(49020.0)), "49,020 mWh");
        assert_eq!(format_mwh(Some(48000.6)), "48,001 mWh");
        assert_eq!(format_mwh(Some(-1500.0)), "-1,500 mWh");
        assert_eq!(format_mwh(None), "n/a");
        assert_eq!(format_percent(Some(96.0)), "96.00%");
        assert_eq!(format_percent(None), "n/a");
        assert_eq!(format_opt(Some(312)), "312");
        assert_eq!(format_opt::<u32>(None), "n/a");
        assert_eq!(or_missing(Some("")), "n/a");
        assert_eq!(or_missing(Some("SMP")), "SMP");
    }
}
