//! Display Formatting
//!
//! Pure helpers shared by the table and chart views. Monetary values render
//! with 2 decimals, prices and quantities with 4, percent changes signed.

/// Format a monetary value: `$` prefix, thousands separators, 2 decimals.
pub fn format_usd(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.2}", value)))
}

/// Format a price for the currency table: `$` prefix, thousands separators,
/// 4 decimals.
pub fn format_usd_price(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.4}", value)))
}

/// Format a trade price: `$` prefix, 4 decimals, no separators. The
/// transaction table renders prices ungrouped, unlike the currency table.
pub fn format_trade_price(value: f64) -> String {
    format!("${:.4}", value)
}

/// Format an asset quantity with 4 decimals, no separators.
pub fn format_quantity(value: f64) -> String {
    format!("{:.4}", value)
}

/// Format a percent change with an explicit sign. Non-negative values get a
/// leading `+` so flat periods read as gains, matching the sign coloring.
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Format an allocation ratio (0-1) as a percentage with 2 decimals.
pub fn format_share(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Compact allocation ratio with 1 decimal, used in pie labels and the
/// per-transaction allocation lists.
pub fn format_share_compact(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Render an RFC 3339 timestamp in local time. Unparsable input falls back
/// to the raw string rather than erroring.
pub fn format_timestamp(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y/%m/%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Insert thousands separators into the integer part of an already-formatted
/// decimal string.
fn group_thousands(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_has_two_decimals_and_separators() {
        assert_eq!(format_usd(90000.0), "$90,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn price_has_four_decimals() {
        assert_eq!(format_usd_price(61250.0), "$61,250.0000");
        assert_eq!(format_usd_price(0.1234), "$0.1234");
    }

    #[test]
    fn trade_price_is_ungrouped() {
        assert_eq!(format_trade_price(61250.0), "$61250.0000");
        assert_eq!(format_trade_price(0.1234), "$0.1234");
    }

    #[test]
    fn quantity_has_four_decimals_no_separators() {
        assert_eq!(format_quantity(1.5), "1.5000");
        assert_eq!(format_quantity(12345.0), "12345.0000");
    }

    #[test]
    fn signed_percent_marks_non_negative_with_plus() {
        assert_eq!(format_signed_percent(1.234), "+1.23%");
        assert_eq!(format_signed_percent(0.0), "+0.00%");
        assert_eq!(format_signed_percent(-0.456), "-0.46%");
    }

    #[test]
    fn share_formats_ratio_as_percentage() {
        assert_eq!(format_share(1.0), "100.00%");
        assert_eq!(format_share(0.385), "38.50%");
        assert_eq!(format_share_compact(1.0), "100.0%");
        assert_eq!(format_share_compact(0.123), "12.3%");
    }

    #[test]
    fn timestamp_falls_back_to_raw_string() {
        assert_eq!(format_timestamp("not a date"), "not a date");
    }

    #[test]
    fn timestamp_parses_rfc3339() {
        // Exact output depends on the local timezone, so only check shape
        let rendered = format_timestamp("2024-01-01T00:00:00Z");
        assert_eq!(rendered.len(), "2024/01/01 00:00:00".len());
        assert_eq!(&rendered[4..5], "/");
    }
}
