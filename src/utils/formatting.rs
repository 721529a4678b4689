//! Formatting utilities used for CLI and terminal views.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut `s` so that its display width does not exceed `max`.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }

    out
}

/// `  8.00h` style hours with two decimals, right aligned on 6 chars.
pub fn hours_col(hours: f64) -> String {
    format!("{:>6.2}h", hours)
}

/// Signed hours: `+12.50h` / `-3.00h`. Zero is shown as surplus.
pub fn signed_hours(hours: f64) -> String {
    if hours >= 0.0 {
        format!("+{:.2}h", hours)
    } else {
        format!("{:.2}h", hours)
    }
}

pub fn percent_col(pct: f64) -> String {
    format!("{:>6.2}%", pct)
}
