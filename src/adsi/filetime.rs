/*!
 * FILETIME Conversion
 *
 * Explicit interpretation of directory timestamps. Accessors return raw
 * integers; callers who know an attribute is a FILETIME (`lastLogon`,
 * `pwdLastSet`, `accountExpires`) convert with these helpers.
 *
 * A FILETIME counts 100ns ticks since 1601-01-01 00:00:00 UTC.
 */

use time::OffsetDateTime;

/// Ticks between 1601-01-01 and the Unix epoch
pub const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

/// Nanoseconds per FILETIME tick
const NANOS_PER_TICK: i128 = 100;

/// Value AD stores for "never"
pub const NEVER: i64 = i64::MAX;

/// Convert a raw FILETIME to a UTC timestamp
///
/// `0`, negative values, and [`NEVER`] carry no instant and map to `None`.
pub fn to_datetime(raw: i64) -> Option<OffsetDateTime> {
    if raw <= 0 || raw == NEVER {
        return None;
    }

    let unix_nanos = i128::from(raw - UNIX_EPOCH_TICKS) * NANOS_PER_TICK;
    OffsetDateTime::from_unix_timestamp_nanos(unix_nanos).ok()
}

/// Convert a timestamp to a raw FILETIME
///
/// Sub-tick precision rounds down to the enclosing tick. Instants before 1601
/// have no FILETIME and map to `None`.
pub fn from_datetime(dt: OffsetDateTime) -> Option<i64> {
    let ticks =
        dt.unix_timestamp_nanos().div_euclid(NANOS_PER_TICK) + i128::from(UNIX_EPOCH_TICKS);
    if ticks < 0 {
        return None;
    }
    i64::try_from(ticks).ok()
}
