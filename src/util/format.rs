use chrono::{DateTime, Utc};

/// Formats a silver amount with `,` as the thousands separator.
pub fn format_silver(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formats a log timestamp the way SQLite's `CURRENT_TIMESTAMP` renders it.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Renders a user mention.
pub fn mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}
