//! Timestamp encoding
//!
//! Renders `YYYY/MM/DD HH:MM:SS ` straight into the line buffer, without a
//! strftime pass and independent of locale.

use super::buffer::Buffer;
use chrono::{DateTime, Datelike, Local, Timelike};

/// Current wall-clock time in the local zone.
#[inline]
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Append `YYYY/MM/DD HH:MM:SS ` (note the trailing space) for `instant`.
///
/// Years before 0 CE are clamped to `0000`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use console_logger::core::{timestamp, Buffer};
///
/// let instant = NaiveDate::from_ymd_opt(2021, 5, 16)
///     .and_then(|d| d.and_hms_opt(9, 6, 54))
///     .unwrap();
/// let mut buf = Buffer::new();
/// timestamp::append_timestamp(&mut buf, &instant);
/// assert_eq!(buf.bytes(), b"2021/05/16 09:06:54 ");
/// ```
pub fn append_timestamp<T>(buf: &mut Buffer, instant: &T)
where
    T: Datelike + Timelike,
{
    let year = u64::try_from(instant.year()).unwrap_or(0);
    buf.append_int(year, 4);
    buf.append_byte(b'/');
    buf.append_int(u64::from(instant.month()), 2);
    buf.append_byte(b'/');
    buf.append_int(u64::from(instant.day()), 2);
    buf.append_byte(b' ');
    buf.append_int(u64::from(instant.hour()), 2);
    buf.append_byte(b':');
    buf.append_int(u64::from(instant.minute()), 2);
    buf.append_byte(b':');
    buf.append_int(u64::from(instant.second()), 2);
    buf.append_byte(b' ');
}
