//! `YYYY-M-D` dates as found in CMDI temporal coverage.
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    /// Four digit year, one or two digit month and day.
    static ref YYYY_MM_DD: Regex =
        Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})$")
            .expect("valid date regex");
}

/// Parse a `YYYY-M-D` date.
///
/// Leading and trailing whitespace is ignored.
/// Anything else that does not follow the pattern, or that does not denote an existing day, is an error.
pub fn parse_date(text: &str) -> Result<NaiveDate, Error> {
    let err = || Error::DateParse(text.to_string());
    let caps = YYYY_MM_DD.captures(text.trim()).ok_or_else(err)?;

    // the regex only lets digits through, so these can't fail
    let year: i32 = caps["year"].parse().map_err(|_| err())?;
    let month: u32 = caps["month"].parse().map_err(|_| err())?;
    let day: u32 = caps["day"].parse().map_err(|_| err())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}
