//! Go-style duration strings
//!
//! Token TTLs are configured the way Go's `time.ParseDuration` reads
//! them: a sequence of decimal numbers with a unit suffix, e.g. `"1h30m"`,
//! `"90s"`, `"1.5h"`. Supported units: `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`.

use std::time::Duration;

// Ordered longest-suffix-first so "ms" wins over "m" + trailing "s".
const UNITS: &[(&str, f64)] = &[
    ("ns", 1e-9),
    ("us", 1e-6),
    ("µs", 1e-6),
    ("ms", 1e-3),
    ("h", 3600.0),
    ("m", 60.0),
    ("s", 1.0),
];

/// Parse a Go-style duration string. `"0"` and the empty string are zero.
/// A leading sign is accepted, but a non-zero negative duration is an
/// error since TTLs cannot go backwards.
pub fn parse_go_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() || s == "0" {
        return Ok(Duration::ZERO);
    }

    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if unsigned == "0" {
        return Ok(Duration::ZERO);
    }
    if unsigned.is_empty() {
        return Err(format!("invalid duration {input:?}"));
    }

    let mut rest = unsigned;
    let mut total_secs = 0f64;

    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(digits_end);

        let value: f64 = number
            .parse()
            .map_err(|_| format!("invalid duration {input:?}"))?;

        let (unit, factor) = UNITS
            .iter()
            .find(|(suffix, _)| tail.starts_with(suffix))
            .ok_or_else(|| format!("missing unit in duration {input:?}"))?;

        total_secs += value * factor;
        rest = &tail[unit.len()..];
    }

    if negative && total_secs > 0.0 {
        return Err(format!("negative duration {input:?}"));
    }

    // Rejects NaN, infinite and out-of-range totals.
    Duration::try_from_secs_f64(total_secs).map_err(|_| format!("invalid duration {input:?}"))
}
