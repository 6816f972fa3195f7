use num::BigUint;

/// Put a comma between every group of three digits.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234567` as `1,234,567`.
pub fn format_count(count: &BigUint) -> String {
    group_digits(&count.to_str_radix(10))
}

/// "1 in X". Whole numbers with separators from a thousand up, one
/// decimal below that.
pub fn format_odds(odds: f64) -> String {
    if odds >= 1000.0 {
        format!("1 in {}", group_digits(&format!("{odds:.0}")))
    } else {
        format!("1 in {odds:.1}")
    }
}

/// A probability as a percentage.
pub fn format_percent(probability: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, probability * 100.0)
}
