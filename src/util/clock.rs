//! Wall-clock access.
//!
//! Client-side (csr): `Date.now()` through `js-sys`.
//! Native builds and tests: `time::OffsetDateTime::now_utc()`.

use time::Date;

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now() as u64;
        ms
    }
    #[cfg(not(feature = "csr"))]
    {
        let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        u64::try_from(nanos).unwrap_or(0)
    }
}

/// Today's calendar date in the browser's local time zone.
#[must_use]
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).ok();
        match (year, month, day) {
            (Some(y), Some(m), Some(d)) => Date::from_calendar_date(y, m, d).unwrap_or_else(|_| utc_today()),
            _ => utc_today(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        utc_today()
    }
}

fn utc_today() -> Date {
    time::OffsetDateTime::now_utc().date()
}
