use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    SignedDuration, Zoned,
};

use crate::{
    advance::exact_offset,
    duration::Duration,
    error::{advance::Error as E, Error, ErrorContext},
};

/// A point in calendar time that a [`Duration`] can be applied to.
///
/// This wraps one of `jiff`'s datetime types:
///
/// * [`Date`]: a date without a time of day. Days, weeks and fortnights step
/// whole calendar days. Applying hours, minutes or seconds turns it into a
/// `DateTime` at midnight first.
/// * [`DateTime`]: a civil datetime with no time zone. Sub-month units are
/// exact offsets with ordinary wall clock carries.
/// * [`Zoned`]: a datetime in a time zone. Sub-month units are exact offsets
/// on the timeline; years and months step the civil fields and then
/// resolve back into the same time zone.
///
/// `From` impls exist for all three types (and `&Zoned`), so any of them can
/// be passed directly to [`Duration::since`] and friends.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use jiff_units::{CalendarPoint, ToDuration};
///
/// let p = CalendarPoint::from(date(2024, 1, 31));
/// assert_eq!((p.clone() + 1.month()).to_date(), Some(date(2024, 2, 29)));
/// assert_eq!(
///     (p + 90.minutes()).to_datetime(),
///     date(2024, 1, 31).at(1, 30, 0, 0),
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CalendarPoint {
    /// A date without a time of day.
    Date(Date),
    /// A civil datetime without a time zone.
    DateTime(DateTime),
    /// A datetime in a particular time zone.
    Zoned(Zoned),
}

impl CalendarPoint {
    /// Returns the civil date of this point.
    #[inline]
    pub fn date(&self) -> Date {
        match *self {
            CalendarPoint::Date(date) => date,
            CalendarPoint::DateTime(dt) => dt.date(),
            CalendarPoint::Zoned(ref zdt) => zdt.date(),
        }
    }

    /// Returns the civil datetime of this point. A date-only point is at
    /// midnight.
    #[inline]
    pub fn to_datetime(&self) -> DateTime {
        match *self {
            CalendarPoint::Date(date) => date.to_datetime(Time::midnight()),
            CalendarPoint::DateTime(dt) => dt,
            CalendarPoint::Zoned(ref zdt) => zdt.datetime(),
        }
    }

    /// Returns the date when this is a date-only point.
    #[inline]
    pub fn to_date(&self) -> Option<Date> {
        match *self {
            CalendarPoint::Date(date) => Some(date),
            _ => None,
        }
    }

    /// Returns the zoned datetime when this point has a time zone.
    #[inline]
    pub fn as_zoned(&self) -> Option<&Zoned> {
        match *self {
            CalendarPoint::Zoned(ref zdt) => Some(zdt),
            _ => None,
        }
    }

    /// Consumes this point and returns the zoned datetime when it has a time
    /// zone.
    #[inline]
    pub fn into_zoned(self) -> Option<Zoned> {
        match self {
            CalendarPoint::Zoned(zdt) => Some(zdt),
            _ => None,
        }
    }

    /// Returns the time zone of this point, if it has one.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{civil::date, tz::TimeZone};
    /// use jiff_units::CalendarPoint;
    ///
    /// let civil = CalendarPoint::from(date(2024, 6, 1).at(9, 0, 0, 0));
    /// assert!(civil.time_zone().is_none());
    ///
    /// let zdt = date(2024, 6, 1).at(9, 0, 0, 0).to_zoned(TimeZone::UTC)?;
    /// assert!(CalendarPoint::from(zdt).time_zone().is_some());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn time_zone(&self) -> Option<&TimeZone> {
        self.as_zoned().map(|zdt| zdt.time_zone())
    }

    /// Returns true when this point carries a time of day, i.e., it isn't
    /// date-only.
    #[inline]
    pub fn has_time(&self) -> bool {
        !matches!(*self, CalendarPoint::Date(_))
    }

    /// Applies the given duration to this point.
    ///
    /// This is the same as [`Duration::since`].
    #[inline]
    pub fn checked_add(
        &self,
        duration: &Duration,
    ) -> Result<CalendarPoint, Error> {
        duration.since(self.clone())
    }

    /// Applies the negation of the given duration to this point.
    ///
    /// This is the same as [`Duration::until`].
    #[inline]
    pub fn checked_sub(
        &self,
        duration: &Duration,
    ) -> Result<CalendarPoint, Error> {
        duration.until(self.clone())
    }

    /// Adds a plain number of seconds to this point as an exact offset.
    ///
    /// This is what applying a duration's scalar looks like once it has
    /// been converted to a plain number, so no calendar stepping happens.
    /// A date-only point becomes a datetime at midnight first.
    ///
    /// # Errors
    ///
    /// When `seconds` isn't finite or the result is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_units::{CalendarPoint, ToDuration};
    ///
    /// let p = CalendarPoint::from(date(2005, 2, 10).at(15, 30, 45, 0));
    /// // A month is 30 nominal days once it's just a number.
    /// let flat = p.checked_add_seconds(1.month().to_float())?;
    /// assert_eq!(flat.to_datetime(), date(2005, 3, 12).at(15, 30, 45, 0));
    /// // But it's a calendar month as a duration.
    /// let stepped = p.checked_add(&1.month())?;
    /// assert_eq!(stepped.to_datetime(), date(2005, 3, 10).at(15, 30, 45, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_seconds(
        &self,
        seconds: f64,
    ) -> Result<CalendarPoint, Error> {
        let offset = exact_offset(seconds)?;
        self.clone().promote().add_exact(offset)
    }

    /// Converts a date-only point to a datetime at midnight. Other points
    /// are returned unchanged.
    #[inline]
    pub(crate) fn promote(self) -> CalendarPoint {
        match self {
            CalendarPoint::Date(date) => {
                CalendarPoint::DateTime(date.to_datetime(Time::midnight()))
            }
            point => point,
        }
    }

    /// Replaces the civil date of this point, keeping its time of day and
    /// time zone.
    pub(crate) fn with_date(
        &self,
        date: Date,
    ) -> Result<CalendarPoint, Error> {
        Ok(match *self {
            CalendarPoint::Date(_) => CalendarPoint::Date(date),
            CalendarPoint::DateTime(dt) => {
                CalendarPoint::DateTime(DateTime::from_parts(date, dt.time()))
            }
            CalendarPoint::Zoned(ref zdt) => {
                let dt = DateTime::from_parts(date, zdt.time());
                CalendarPoint::Zoned(dt.to_zoned(zdt.time_zone().clone())?)
            }
        })
    }

    /// Adds an exact elapsed-time offset. For a `Date`, the offset is
    /// interpreted in units of 24-hour days and anything smaller is
    /// dropped, so callers promote first when they need the time of day.
    pub(crate) fn add_exact(
        &self,
        offset: SignedDuration,
    ) -> Result<CalendarPoint, Error> {
        let result = match *self {
            CalendarPoint::Date(date) => {
                date.checked_add(offset).map(CalendarPoint::Date)
            }
            CalendarPoint::DateTime(dt) => {
                dt.checked_add(offset).map(CalendarPoint::DateTime)
            }
            CalendarPoint::Zoned(ref zdt) => {
                zdt.checked_add(offset).map(CalendarPoint::Zoned)
            }
        };
        result.with_context(|| E::ExactOffset {
            seconds: offset.as_secs_f64(),
        })
    }
}

impl From<Date> for CalendarPoint {
    #[inline]
    fn from(date: Date) -> CalendarPoint {
        CalendarPoint::Date(date)
    }
}

impl From<DateTime> for CalendarPoint {
    #[inline]
    fn from(dt: DateTime) -> CalendarPoint {
        CalendarPoint::DateTime(dt)
    }
}

impl From<Zoned> for CalendarPoint {
    #[inline]
    fn from(zdt: Zoned) -> CalendarPoint {
        CalendarPoint::Zoned(zdt)
    }
}

impl<'a> From<&'a Zoned> for CalendarPoint {
    #[inline]
    fn from(zdt: &'a Zoned) -> CalendarPoint {
        CalendarPoint::Zoned(zdt.clone())
    }
}

impl core::fmt::Display for CalendarPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            CalendarPoint::Date(ref date) => core::fmt::Display::fmt(date, f),
            CalendarPoint::DateTime(ref dt) => core::fmt::Display::fmt(dt, f),
            CalendarPoint::Zoned(ref zdt) => core::fmt::Display::fmt(zdt, f),
        }
    }
}

/// Points of the same kind are ordered chronologically. Zoned points compare
/// by their instant. Points of different kinds are incomparable.
impl PartialOrd for CalendarPoint {
    #[inline]
    fn partial_cmp(
        &self,
        other: &CalendarPoint,
    ) -> Option<core::cmp::Ordering> {
        match (self, other) {
            (CalendarPoint::Date(lhs), CalendarPoint::Date(rhs)) => {
                lhs.partial_cmp(rhs)
            }
            (CalendarPoint::DateTime(lhs), CalendarPoint::DateTime(rhs)) => {
                lhs.partial_cmp(rhs)
            }
            (CalendarPoint::Zoned(lhs), CalendarPoint::Zoned(rhs)) => {
                lhs.partial_cmp(rhs)
            }
            _ => None,
        }
    }
}

/// Applies a duration to a calendar point.
///
/// This uses checked arithmetic and panics on overflow. To handle overflow
/// without panics, use [`CalendarPoint::checked_add`].
impl core::ops::Add<Duration> for CalendarPoint {
    type Output = CalendarPoint;

    #[inline]
    fn add(self, rhs: Duration) -> CalendarPoint {
        rhs.since(self).expect("adding duration to calendar point overflowed")
    }
}

/// Applies the negation of a duration to a calendar point.
///
/// This uses checked arithmetic and panics on overflow. To handle overflow
/// without panics, use [`CalendarPoint::checked_sub`].
impl core::ops::Sub<Duration> for CalendarPoint {
    type Output = CalendarPoint;

    #[inline]
    fn sub(self, rhs: Duration) -> CalendarPoint {
        rhs.until(self)
            .expect("subtracting duration from calendar point overflowed")
    }
}

/// Adds a plain number of seconds as an exact offset.
///
/// This panics on overflow or when the number isn't finite. To handle those
/// cases without panics, use [`CalendarPoint::checked_add_seconds`].
impl core::ops::Add<f64> for CalendarPoint {
    type Output = CalendarPoint;

    #[inline]
    fn add(self, rhs: f64) -> CalendarPoint {
        self.checked_add_seconds(rhs)
            .expect("adding seconds to calendar point overflowed")
    }
}

/// Subtracts a plain number of seconds as an exact offset.
///
/// This panics on overflow or when the number isn't finite. To handle those
/// cases without panics, use [`CalendarPoint::checked_add_seconds`] with a
/// negated number.
impl core::ops::Sub<f64> for CalendarPoint {
    type Output = CalendarPoint;

    #[inline]
    fn sub(self, rhs: f64) -> CalendarPoint {
        self.checked_add_seconds(-rhs)
            .expect("subtracting seconds from calendar point overflowed")
    }
}

/// Adds a plain number of seconds as an exact offset.
///
/// This panics on overflow. To handle overflow without panics, use
/// [`CalendarPoint::checked_add_seconds`].
impl core::ops::Add<i64> for CalendarPoint {
    type Output = CalendarPoint;

    #[inline]
    fn add(self, rhs: i64) -> CalendarPoint {
        self + rhs as f64
    }
}

/// Subtracts a plain number of seconds as an exact offset.
///
/// This panics on overflow. To handle overflow without panics, use
/// [`CalendarPoint::checked_add_seconds`] with a negated number.
impl core::ops::Sub<i64> for CalendarPoint {
    type Output = CalendarPoint;

    #[inline]
    fn sub(self, rhs: i64) -> CalendarPoint {
        self - rhs as f64
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::ToDuration;

    use super::*;

    #[test]
    fn accessors() {
        let d = CalendarPoint::from(date(2024, 2, 29));
        assert_eq!(d.date(), date(2024, 2, 29));
        assert_eq!(d.to_date(), Some(date(2024, 2, 29)));
        assert_eq!(d.to_datetime(), date(2024, 2, 29).at(0, 0, 0, 0));
        assert!(!d.has_time());
        assert!(d.time_zone().is_none());

        let dt = CalendarPoint::from(date(2024, 2, 29).at(23, 59, 59, 0));
        assert_eq!(dt.to_date(), None);
        assert!(dt.has_time());
        assert!(dt.as_zoned().is_none());
    }

    #[test]
    fn promote_only_touches_dates() {
        let d = CalendarPoint::from(date(2024, 2, 29)).promote();
        let midnight = date(2024, 2, 29).at(0, 0, 0, 0);
        assert_eq!(d, CalendarPoint::DateTime(midnight));
        let dt = CalendarPoint::from(date(2024, 2, 29).at(1, 2, 3, 4));
        assert_eq!(dt.clone().promote(), dt);
    }

    #[test]
    fn with_date_keeps_time_and_zone() {
        let zdt = date(2024, 3, 9)
            .at(2, 30, 0, 0)
            .to_zoned(TimeZone::fixed(jiff::tz::offset(-5)))
            .unwrap();
        let p = CalendarPoint::from(&zdt);
        let moved = p.with_date(date(2024, 12, 25)).unwrap();
        let got = moved.as_zoned().unwrap();
        assert_eq!(got.datetime(), date(2024, 12, 25).at(2, 30, 0, 0));
        assert_eq!(got.offset(), jiff::tz::offset(-5));
    }

    #[test]
    fn plain_seconds() {
        let now = CalendarPoint::from(date(2005, 2, 10).at(15, 30, 45, 0));
        assert_eq!(now.clone() + 8, now.clone() + 8.seconds());
        assert_eq!(now.clone() + 22.5, now.clone() + 22.5.seconds());
        assert_eq!(
            (now.clone() + 22.5).to_datetime(),
            date(2005, 2, 10).at(15, 31, 7, 500_000_000),
        );
        assert_eq!(now.clone() - 45, now.clone() - 45.seconds());

        let today = CalendarPoint::from(date(2005, 2, 10));
        assert_eq!(
            (today + 60).to_datetime(),
            date(2005, 2, 10).at(0, 1, 0, 0),
        );
        assert!(now.checked_add_seconds(f64::INFINITY).is_err());
    }

    #[test]
    fn ordering_within_kinds() {
        let d = CalendarPoint::from(date(2005, 2, 10));
        assert!(d < CalendarPoint::from(date(2005, 2, 11)));
        let dt = CalendarPoint::from(date(2005, 2, 10).at(15, 30, 45, 0));
        assert!(dt.clone() + 1 > dt);
        assert_eq!(d.partial_cmp(&dt), None);
        assert!(!(d < dt) && !(d >= dt));

        let east = date(2005, 2, 10)
            .at(12, 0, 0, 0)
            .to_zoned(TimeZone::fixed(jiff::tz::offset(3)))
            .unwrap();
        let west = date(2005, 2, 10)
            .at(6, 0, 0, 0)
            .to_zoned(TimeZone::fixed(jiff::tz::offset(-5)))
            .unwrap();
        // 09:00 UTC is before 11:00 UTC, despite the wall clocks.
        assert!(CalendarPoint::from(east) < CalendarPoint::from(west));
    }

    #[test]
    fn display() {
        let p = CalendarPoint::from(date(2005, 2, 28).at(15, 15, 10, 0));
        insta::assert_snapshot!(p, @"2005-02-28T15:15:10");
        let p = CalendarPoint::from(date(2005, 2, 28));
        insta::assert_snapshot!(p, @"2005-02-28");
    }
}
