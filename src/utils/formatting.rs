//! Formatting utilities used for CLI and export outputs.

use std::fmt::Display;

/// `1234567` → `1,234,567`. Amounts are whole rupees.
pub fn amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if value < 0 { format!("-{}", out) } else { out }
}

/// Human form of a list column: `[1, 2, 3]`.
pub fn list<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

pub fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
