use chrono::{FixedOffset, Utc};

/// Parse offsets such as `+05:30`, `-03:00`, `+0100`, or `Z` / `UTC`.
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }
    s.parse::<FixedOffset>().ok()
}

/// Server-side creation stamp: minute precision, seconds forced to `00`.
pub fn created_at_stamp(offset: &FixedOffset) -> String {
    Utc::now()
        .with_timezone(offset)
        .format("%Y-%m-%d %H:%M:00")
        .to_string()
}
