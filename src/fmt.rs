/// Format a value as a currency amount with thousands separators: ₹1,234.56
pub fn money(val: f64, symbol: &str) -> String {
    let negative = val < 0.0;
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let grouped = group_thousands(int_part);
    if negative {
        format!("-{symbol}{grouped}.{dec_part}")
    } else {
        format!("{symbol}{grouped}.{dec_part}")
    }
}

/// Whole-unit variant used for headline figures: ₹78,592,678
pub fn money_whole(val: f64, symbol: &str) -> String {
    let negative = val < 0.0;
    let grouped = group_thousands(&format!("{:.0}", val.abs()));
    if negative {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

/// Thousands-separated integer: 12,345
pub fn count(val: i64) -> String {
    let grouped = group_thousands(&val.unsigned_abs().to_string());
    if val < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Human-readable file size: 1.4 MB
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

fn group_thousands(digits: &str) -> String {
    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    with_commas.chars().rev().collect()
}
