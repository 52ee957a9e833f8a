const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with binary unit scaling (B/KB/MB/GB).
///
/// Values below 10 in a scaled unit keep one decimal, everything else is
/// rounded to a whole number. A trailing ".0" is dropped.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut idx = 0;
    while value >= 1024.0 && idx < UNITS.len() - 1 {
        value /= 1024.0;
        idx += 1;
    }

    let decimals = if value >= 10.0 || idx == 0 { 0 } else { 1 };
    // f64::round goes half away from zero, unlike the formatter
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;

    let formatted = format!("{:.*}", decimals, rounded);
    let formatted = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{} {}", formatted, UNITS[idx])
}
