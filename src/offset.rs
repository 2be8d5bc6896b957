use crate::{error::Error, point::CalendarPoint};

#[cfg(feature = "std")]
use crate::anchor::AnchorConfig;

/// A trait for applying a plain number of seconds to a calendar point, e.g.,
/// `8.since(point)` or `5.ago()`.
///
/// Unlike a [`Duration`](crate::Duration), a plain number has no calendar
/// units. It's always an exact elapsed-time offset, so a date-only point is
/// turned into a datetime at midnight first. This is the same as
/// [`CalendarPoint::checked_add_seconds`].
///
/// This trait is implemented for `i8`, `i16`, `i32`, `i64`, `f32` and `f64`.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use jiff_units::{OffsetSeconds, ToDuration};
///
/// let dt = date(2005, 2, 10).at(15, 30, 45, 0);
/// assert_eq!(4_500.since(dt)?, (1.hour() + 15.minutes()).since(dt)?);
/// let earlier = 60.until(dt)?;
/// assert_eq!(earlier.to_datetime(), date(2005, 2, 10).at(15, 29, 45, 0));
///
/// // Converting a duration to a number drops its calendar units.
/// let flat = 1.month().to_integer().since(dt)?;
/// assert_eq!(flat.to_datetime(), date(2005, 3, 12).at(15, 30, 45, 0));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait OffsetSeconds: Sized {
    /// Returns this number of seconds as a float.
    fn to_seconds(self) -> f64;

    /// Moves the given point forward by this many seconds.
    ///
    /// # Errors
    ///
    /// When the number isn't finite, or the result is out of range.
    #[inline]
    fn since(
        self,
        point: impl Into<CalendarPoint>,
    ) -> Result<CalendarPoint, Error> {
        point.into().checked_add_seconds(self.to_seconds())
    }

    /// Moves the given point backward by this many seconds.
    ///
    /// # Errors
    ///
    /// In the same cases as [`OffsetSeconds::since`].
    #[inline]
    fn until(
        self,
        point: impl Into<CalendarPoint>,
    ) -> Result<CalendarPoint, Error> {
        point.into().checked_add_seconds(-self.to_seconds())
    }

    /// Moves the current moment, as resolved by [`AnchorConfig::global`],
    /// forward by this many seconds.
    ///
    /// # Errors
    ///
    /// In the same cases as [`OffsetSeconds::since`].
    #[cfg(feature = "std")]
    #[inline]
    fn from_now(self) -> Result<CalendarPoint, Error> {
        self.from_now_with(&AnchorConfig::global())
    }

    /// Moves the current moment, as resolved by [`AnchorConfig::global`],
    /// backward by this many seconds.
    ///
    /// # Errors
    ///
    /// In the same cases as [`OffsetSeconds::since`].
    #[cfg(feature = "std")]
    #[inline]
    fn ago(self) -> Result<CalendarPoint, Error> {
        self.ago_with(&AnchorConfig::global())
    }

    /// Like [`OffsetSeconds::from_now`], but resolves "now" with the given
    /// configuration.
    #[cfg(feature = "std")]
    #[inline]
    fn from_now_with(
        self,
        config: &AnchorConfig,
    ) -> Result<CalendarPoint, Error> {
        self.since(config.resolve_now())
    }

    /// Like [`OffsetSeconds::ago`], but resolves "now" with the given
    /// configuration.
    #[cfg(feature = "std")]
    #[inline]
    fn ago_with(self, config: &AnchorConfig) -> Result<CalendarPoint, Error> {
        self.until(config.resolve_now())
    }
}

macro_rules! impl_offset_seconds {
    ($ty:ty) => {
        impl OffsetSeconds for $ty {
            #[inline]
            fn to_seconds(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_offset_seconds!(i8);
impl_offset_seconds!(i16);
impl_offset_seconds!(i32);
impl_offset_seconds!(i64);
impl_offset_seconds!(f32);
impl_offset_seconds!(f64);

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::ToDuration;

    use super::*;

    #[test]
    fn matches_seconds_duration() {
        let dt = CalendarPoint::from(date(2005, 2, 10).at(15, 30, 45, 0));
        for seconds in [60, 600, 4500, 189000, 161589600] {
            assert_eq!(
                seconds.since(dt.clone()).unwrap(),
                seconds.seconds().since(dt.clone()).unwrap(),
            );
            assert_eq!(
                seconds.until(dt.clone()).unwrap(),
                dt.clone() - seconds,
            );
        }
    }

    #[test]
    fn dates_are_promoted() {
        let got = 90.since(date(2005, 2, 10)).unwrap();
        assert_eq!(got.to_datetime(), date(2005, 2, 10).at(0, 1, 30, 0));
        let got = 0.5.until(date(2005, 2, 10)).unwrap();
        assert_eq!(
            got.to_datetime(),
            date(2005, 2, 9).at(23, 59, 59, 500_000_000),
        );
    }

    #[test]
    fn non_finite_is_an_error() {
        let err = f64::NAN.since(date(2005, 2, 10)).unwrap_err();
        assert!(err.is_range());
    }
}
