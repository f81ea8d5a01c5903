//! Easter Sunday.
//!
//! Computed with the Anonymous Gregorian algorithm (Meeus/Jones/Butcher),
//! a closed-form integer computation valid for every Gregorian year.

use crate::date::Date;

/// Month and day of Easter Sunday in `year`.
pub fn easter_month_day(year: u16) -> (u8, u8) {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Easter Sunday in `year`.
///
/// Returns `None` only when `year` lies outside the supported date range.
pub fn easter_sunday(year: u16) -> Option<Date> {
    let (month, day) = easter_month_day(year);
    Date::from_ymd(year, month, day).ok()
}
