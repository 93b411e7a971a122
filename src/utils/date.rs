//! Calendar year from the wall clock, without timezone dependencies.
//!
//! The footer only needs the current UTC year, so this converts Unix
//! seconds to a civil year directly instead of pulling in a date crate.

use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: i64 = 86_400;

/// Current UTC year. Clocks before 1970 are clamped to 1970.
pub fn current_year() -> i32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0);
    year_from_unix_secs(secs)
}

/// UTC civil year containing `secs` seconds after the Unix epoch.
pub fn year_from_unix_secs(secs: i64) -> i32 {
    let days = secs.div_euclid(SECS_PER_DAY);
    civil_year_from_days(days)
}

/// Days since 1970-01-01 to proleptic Gregorian year.
///
/// Shifts the epoch to 0000-03-01 so leap days fall at the end of each
/// 400-year era.
#[allow(clippy::cast_possible_truncation)] // Year fits i32 for any i64 day count we accept
fn civil_year_from_days(days: i64) -> i32 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    year as i32
}
