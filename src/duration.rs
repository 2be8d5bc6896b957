use alloc::vec::Vec;

use jiff::SignedDuration;

use crate::{
    advance,
    error::{duration::Error as E, Error, ErrorContext},
    point::CalendarPoint,
    unit::Unit,
};

#[cfg(feature = "std")]
use crate::anchor::AnchorConfig;
#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// One `(unit, amount)` component of a [`Duration`].
///
/// A part is what a duration remembers about how it was composed. Parts are
/// consumed, in order, when a duration is applied to a calendar point.
///
/// # Example
///
/// ```
/// use jiff_units::{Part, ToDuration, Unit};
///
/// let d = 1.day() + 2.months();
/// assert_eq!(d.parts(), &[
///     Part::new(Unit::Day, 1.0),
///     Part::new(Unit::Month, 2.0),
/// ]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    unit: Unit,
    amount: f64,
}

impl Part {
    /// Creates a new part from a unit and a signed amount of that unit.
    #[inline]
    pub const fn new(unit: Unit, amount: f64) -> Part {
        Part { unit, amount }
    }

    /// Returns the unit of this part.
    #[inline]
    pub const fn unit(self) -> Unit {
        self.unit
    }

    /// Returns the signed amount of this part, in units of
    /// [`Part::unit`].
    #[inline]
    pub const fn amount(self) -> f64 {
        self.amount
    }

    /// Returns this part's contribution to a duration's scalar.
    #[inline]
    pub fn nominal_seconds(self) -> f64 {
        self.amount * self.unit.nominal_seconds() as f64
    }

    #[inline]
    pub(crate) fn negate(self) -> Part {
        Part { unit: self.unit, amount: -self.amount }
    }

    #[inline]
    fn scale(self, k: f64) -> Part {
        Part { unit: self.unit, amount: self.amount * k }
    }

    #[inline]
    fn divide(self, k: f64) -> Part {
        Part { unit: self.unit, amount: self.amount / k }
    }
}

/// A duration composed of calendar and clock units.
///
/// A `Duration` is two things at once:
///
/// * A *scalar*: a nominal number of seconds, computed with the fixed table
/// in [`Unit::nominal_seconds`] (where a month is 30 days and a year is
/// 365.25 days). The scalar is used for equality, ordering, comparison with
/// plain numbers and conversion to a plain number.
/// * An ordered list of [`Part`]s: the `(unit, amount)` pairs the duration
/// was composed from. The parts are used when the duration is applied to a
/// calendar point with [`Duration::since`] or [`Duration::until`], which step
/// months and years through the calendar instead of adding nominal seconds.
///
/// The scalar is always equal to the sum of each part's amount multiplied by
/// its unit's nominal length.
///
/// # Construction
///
/// Use the [`ToDuration`] trait on a number, or [`Duration::of`]:
///
/// ```
/// use jiff_units::{Duration, ToDuration, Unit};
///
/// assert_eq!(5.years() + 1.month() + 1.fortnight(), 161_589_600);
/// assert_eq!(Duration::of(90.0, Unit::Minute), 1.5.hours());
/// ```
///
/// # Equality
///
/// Two durations are equal when their scalars are equal, regardless of
/// parts. Notably, this means `1.month() == 30.days()`, even though the two
/// step a calendar differently:
///
/// ```
/// use jiff::civil::date;
/// use jiff_units::ToDuration;
///
/// assert_eq!(1.month(), 30.days());
///
/// let d = date(2024, 2, 1);
/// assert_eq!(1.month().since(d)?.date(), date(2024, 3, 1));
/// assert_eq!(30.days().since(d)?.date(), date(2024, 3, 2));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Arithmetic
///
/// Adding durations concatenates their parts (same units are *not* merged)
/// and adds their scalars. Negation, multiplication and division apply to
/// the scalar and to every part. Division by zero panics with the `/`
/// operator; use [`Duration::checked_div`] to get an error instead.
///
/// Converting to a plain number with [`Duration::to_integer`] or
/// [`Duration::to_float`] discards the parts. That's lossy on purpose:
/// applying the resulting number as an offset adds elapsed seconds.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Part>", into = "Vec<Part>")
)]
pub struct Duration {
    scalar: f64,
    parts: Vec<Part>,
}

impl Duration {
    /// A duration of zero nominal seconds and no parts.
    pub const ZERO: Duration = Duration { scalar: 0.0, parts: Vec::new() };

    /// Creates a duration of `amount` units of `unit`.
    ///
    /// The [`ToDuration`] trait is usually more convenient.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::{Duration, Unit};
    ///
    /// let d = Duration::of(2.0, Unit::Week);
    /// assert_eq!(d.to_integer(), 1_209_600);
    /// ```
    #[inline]
    pub fn of(amount: f64, unit: Unit) -> Duration {
        let part = Part::new(unit, amount);
        let mut parts = Vec::with_capacity(1);
        parts.push(part);
        Duration { scalar: part.nominal_seconds(), parts }
    }

    /// Returns the parts of this duration in composition order.
    #[inline]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Returns true when this duration's scalar is zero.
    ///
    /// A duration can have parts and still be zero, e.g.,
    /// `1.week() - 7.days()`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.scalar == 0.0
    }

    /// Returns the sign of this duration's scalar: `1`, `0` or `-1`.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.scalar > 0.0 {
            1
        } else if self.scalar < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Returns this duration negated when its scalar is negative, and an
    /// unchanged copy otherwise.
    #[inline]
    pub fn abs(&self) -> Duration {
        if self.signum() < 0 {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Returns this duration with the sign of the scalar and of every part
    /// flipped.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::ToDuration;
    ///
    /// let d = 1.year() - 2.days();
    /// assert_eq!(d.negate(), 2.days() - 1.year());
    /// assert_eq!(d.negate().negate().parts(), d.parts());
    /// ```
    pub fn negate(&self) -> Duration {
        Duration {
            scalar: -self.scalar,
            parts: self.parts.iter().map(|p| p.negate()).collect(),
        }
    }

    /// Multiplies the scalar and every part by `k`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::ToDuration;
    ///
    /// let d = (1.month() + 1.day()).scale(3);
    /// assert_eq!(d, 3.months() + 3.days());
    /// assert_eq!(d.parts()[0].amount(), 3.0);
    /// ```
    pub fn scale(&self, k: impl Into<f64>) -> Duration {
        let k = k.into();
        Duration {
            scalar: self.scalar * k,
            parts: self.parts.iter().map(|p| p.scale(k)).collect(),
        }
    }

    /// Divides the scalar and every part by `k`.
    ///
    /// # Errors
    ///
    /// When `k` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::ToDuration;
    ///
    /// assert_eq!(1.hour().checked_div(4)?, 15.minutes());
    /// assert!(1.hour().checked_div(0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_div(&self, k: impl Into<f64>) -> Result<Duration, Error> {
        let k = k.into();
        if k == 0.0 {
            return Err(E::DivisionByZero { scalar: self.scalar }.into());
        }
        Ok(Duration {
            scalar: self.scalar / k,
            parts: self.parts.iter().map(|p| p.divide(k)).collect(),
        })
    }

    /// Returns the scalar truncated toward zero, discarding the parts.
    ///
    /// Scalars beyond the range of an `i64` saturate, and NaN becomes `0`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::ToDuration;
    ///
    /// assert_eq!(1.month().to_integer(), 2_592_000);
    /// assert_eq!(1.5.seconds().to_integer(), 1);
    /// assert_eq!((-1.5).seconds().to_integer(), -1);
    /// ```
    #[inline]
    pub fn to_integer(&self) -> i64 {
        self.scalar.trunc() as i64
    }

    /// Returns the scalar, discarding the parts.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::ToDuration;
    ///
    /// assert_eq!(1.year().to_float(), 365.25 * 86_400.0);
    /// ```
    #[inline]
    pub fn to_float(&self) -> f64 {
        self.scalar
    }

    /// Converts the scalar to a flat [`SignedDuration`], discarding the
    /// parts.
    ///
    /// # Errors
    ///
    /// When the scalar isn't finite or doesn't fit in a `SignedDuration`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::SignedDuration;
    /// use jiff_units::ToDuration;
    ///
    /// assert_eq!(
    ///     (1.hour() + 15.minutes()).to_signed_duration()?,
    ///     SignedDuration::from_secs(4_500),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_signed_duration(&self) -> Result<SignedDuration, Error> {
        SignedDuration::try_from_secs_f64(self.scalar)
            .context(E::ConvertToSignedDuration { scalar: self.scalar })
    }

    /// Applies this duration to the given calendar point, moving forward in
    /// time for a positive duration.
    ///
    /// Parts are applied one at a time, in composition order. Years and
    /// months step the calendar fields and clamp the day of the month to the
    /// last valid day. Days, weeks and fortnights step calendar days for a
    /// [`jiff::civil::Date`] and are exact 24-hour offsets otherwise. Hours,
    /// minutes and seconds are exact offsets, and a `Date` receiving one of
    /// them becomes a [`jiff::civil::DateTime`] at midnight first.
    ///
    /// # Errors
    ///
    /// When the result is out of the range supported by `jiff`, or when an
    /// amount can't be applied (e.g., it isn't finite).
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_units::ToDuration;
    ///
    /// let d = date(2024, 1, 31);
    /// assert_eq!(1.month().since(d)?.date(), date(2024, 2, 29));
    /// let leap = date(2024, 2, 29);
    /// assert_eq!(1.year().since(leap)?.date(), date(2025, 2, 28));
    ///
    /// let dt = d.at(15, 30, 45, 0);
    /// assert_eq!(
    ///     (1.day() + 1.month()).since(dt)?.to_datetime(),
    ///     date(2024, 3, 1).at(15, 30, 45, 0),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn since(
        &self,
        point: impl Into<CalendarPoint>,
    ) -> Result<CalendarPoint, Error> {
        advance::advance(point.into(), self.parts.iter().copied())
    }

    /// Applies the negation of this duration to the given calendar point,
    /// moving backward in time for a positive duration.
    ///
    /// This is equivalent to `self.negate().since(point)`.
    ///
    /// # Errors
    ///
    /// In the same cases as [`Duration::since`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_units::ToDuration;
    ///
    /// let d = date(2024, 3, 31);
    /// assert_eq!(1.month().until(d)?.date(), date(2024, 2, 29));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(
        &self,
        point: impl Into<CalendarPoint>,
    ) -> Result<CalendarPoint, Error> {
        advance::advance(point.into(), self.parts.iter().map(|p| p.negate()))
    }

    /// Applies this duration to the current moment, as resolved by the
    /// process-wide [`AnchorConfig::global`].
    ///
    /// When no default time zone is set, the result is a civil datetime in
    /// the system's local time. Otherwise, it's a zoned datetime in the
    /// default time zone.
    ///
    /// # Errors
    ///
    /// In the same cases as [`Duration::since`].
    #[cfg(feature = "std")]
    pub fn from_now(&self) -> Result<CalendarPoint, Error> {
        self.from_now_with(&AnchorConfig::global())
    }

    /// Applies the negation of this duration to the current moment, as
    /// resolved by the process-wide [`AnchorConfig::global`].
    ///
    /// # Errors
    ///
    /// In the same cases as [`Duration::since`].
    #[cfg(feature = "std")]
    pub fn ago(&self) -> Result<CalendarPoint, Error> {
        self.ago_with(&AnchorConfig::global())
    }

    /// Like [`Duration::from_now`], but resolves "now" with the given
    /// configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{civil::date, tz::TimeZone, Timestamp};
    /// use jiff_units::{AnchorConfig, ToDuration};
    ///
    /// let config = AnchorConfig::new()
    ///     .now(Timestamp::from_second(946_684_800)?)
    ///     .time_zone(TimeZone::UTC);
    /// let zdt = 5.seconds().from_now_with(&config)?.into_zoned().unwrap();
    /// assert_eq!(zdt.datetime(), date(2000, 1, 1).at(0, 0, 5, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[cfg(feature = "std")]
    pub fn from_now_with(
        &self,
        config: &AnchorConfig,
    ) -> Result<CalendarPoint, Error> {
        self.since(config.resolve_now())
    }

    /// Like [`Duration::ago`], but resolves "now" with the given
    /// configuration.
    #[cfg(feature = "std")]
    pub fn ago_with(
        &self,
        config: &AnchorConfig,
    ) -> Result<CalendarPoint, Error> {
        self.until(config.resolve_now())
    }

    fn concat(mut self, other: &Duration) -> Duration {
        self.scalar += other.scalar;
        self.parts.extend_from_slice(&other.parts);
        self
    }
}

/// Builds a duration from parts, computing the scalar from them.
impl FromIterator<Part> for Duration {
    fn from_iter<I: IntoIterator<Item = Part>>(it: I) -> Duration {
        let parts: Vec<Part> = it.into_iter().collect();
        let scalar = parts.iter().map(|p| p.nominal_seconds()).sum();
        Duration { scalar, parts }
    }
}

impl From<Vec<Part>> for Duration {
    fn from(parts: Vec<Part>) -> Duration {
        parts.into_iter().collect()
    }
}

impl From<Duration> for Vec<Part> {
    fn from(d: Duration) -> Vec<Part> {
        d.parts
    }
}

impl core::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        self.negate()
    }
}

impl<'a> core::ops::Neg for &'a Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        self.negate()
    }
}

impl core::ops::Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.concat(&rhs)
    }
}

impl<'a> core::ops::Add<&'a Duration> for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: &'a Duration) -> Duration {
        self.concat(rhs)
    }
}

impl core::ops::Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        self.concat(&rhs.negate())
    }
}

impl<'a> core::ops::Sub<&'a Duration> for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: &'a Duration) -> Duration {
        self.concat(&rhs.negate())
    }
}

impl core::ops::AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        self.scalar += rhs.scalar;
        self.parts.extend(rhs.parts);
    }
}

impl core::ops::SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self += rhs.negate();
    }
}

macro_rules! impl_scalar_ops {
    ($ty:ty) => {
        /// Multiplies the scalar and every part by a plain number.
        impl core::ops::Mul<$ty> for Duration {
            type Output = Duration;

            #[inline]
            fn mul(self, rhs: $ty) -> Duration {
                self.scale(rhs as f64)
            }
        }

        /// Multiplies the scalar and every part by a plain number.
        impl core::ops::Mul<Duration> for $ty {
            type Output = Duration;

            #[inline]
            fn mul(self, rhs: Duration) -> Duration {
                rhs.scale(self as f64)
            }
        }

        /// Divides the scalar and every part by a plain number.
        ///
        /// This panics when dividing by zero. Use
        /// [`Duration::checked_div`] to get an error instead.
        impl core::ops::Div<$ty> for Duration {
            type Output = Duration;

            #[inline]
            fn div(self, rhs: $ty) -> Duration {
                match self.checked_div(rhs as f64) {
                    Ok(d) => d,
                    Err(err) => panic!("dividing `Duration` failed: {err}"),
                }
            }
        }
    };
}

impl_scalar_ops!(i64);
impl_scalar_ops!(f64);

impl core::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(it: I) -> Duration {
        it.fold(Duration::ZERO, |acc, d| acc + d)
    }
}

impl<'a> core::iter::Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(it: I) -> Duration {
        it.fold(Duration::ZERO, |acc, d| acc + d)
    }
}

/// Durations are equal when their scalars are equal. Parts are ignored.
impl PartialEq for Duration {
    #[inline]
    fn eq(&self, other: &Duration) -> bool {
        self.scalar == other.scalar
    }
}

/// Durations are ordered by their scalars. Parts are ignored.
impl PartialOrd for Duration {
    #[inline]
    fn partial_cmp(&self, other: &Duration) -> Option<core::cmp::Ordering> {
        self.scalar.partial_cmp(&other.scalar)
    }
}

// Plain numbers are compared against the scalar as a number of seconds.
// Integers wider than 53 bits lose precision in the conversion.
macro_rules! impl_number_cmp {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Duration {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self.scalar == *other as f64
                }
            }

            impl PartialEq<Duration> for $ty {
                #[inline]
                fn eq(&self, other: &Duration) -> bool {
                    *self as f64 == other.scalar
                }
            }

            impl PartialOrd<$ty> for Duration {
                #[inline]
                fn partial_cmp(
                    &self,
                    other: &$ty,
                ) -> Option<core::cmp::Ordering> {
                    self.scalar.partial_cmp(&(*other as f64))
                }
            }

            impl PartialOrd<Duration> for $ty {
                #[inline]
                fn partial_cmp(
                    &self,
                    other: &Duration,
                ) -> Option<core::cmp::Ordering> {
                    (*self as f64).partial_cmp(&other.scalar)
                }
            }
        )*
    };
}

impl_number_cmp!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Writes a friendly description of this duration, with amounts merged per
/// unit and units in descending order.
///
/// # Example
///
/// ```
/// use jiff_units::ToDuration;
///
/// let d = 5.years() + 1.month() + 1.fortnight();
/// assert_eq!(d.to_string(), "5 years, 1 month, and 1 fortnight");
/// assert_eq!((2.days() + 3.days()).to_string(), "5 days");
/// assert_eq!((1.week() - 1.week()).to_string(), "0 seconds");
/// ```
impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut merged = [0.0f64; Unit::ALL.len()];
        for part in self.parts.iter() {
            merged[part.unit().index()] += part.amount();
        }
        let nonzero: Vec<(Unit, f64)> = Unit::ALL
            .iter()
            .map(|&unit| (unit, merged[unit.index()]))
            .filter(|&(_, amount)| amount != 0.0)
            .collect();
        if nonzero.is_empty() {
            return f.write_str("0 seconds");
        }
        let last = nonzero.len() - 1;
        for (i, &(unit, amount)) in nonzero.iter().enumerate() {
            if i > 0 {
                f.write_str(match (i == last, nonzero.len()) {
                    (true, 2) => " and ",
                    (true, _) => ", and ",
                    (false, _) => ", ",
                })?;
            }
            let name = if amount == 1.0 || amount == -1.0 {
                unit.singular()
            } else {
                unit.plural()
            };
            write!(f, "{amount} {name}")?;
        }
        Ok(())
    }
}

/// A trait for creating [`Duration`] values from numbers, e.g., `5.years()`
/// or `22.9.seconds()`.
///
/// This trait is implemented for `i8`, `i16`, `i32`, `i64`, `f32` and `f64`.
/// Each method has a singular alias that reads better for an amount of `1`.
/// Amounts are stored as `f64`, so `i64` amounts beyond 2^53 lose precision.
///
/// # Example
///
/// ```
/// use jiff_units::ToDuration;
///
/// assert_eq!(1.minute(), 60);
/// assert_eq!(10.minutes(), 600);
/// assert_eq!(1.hour() + 15.minutes(), 4_500);
/// assert_eq!(2.days() + 4.hours() + 30.minutes(), 189_000);
/// assert_eq!(5.years() + 1.month() + 1.fortnight(), 161_589_600);
/// ```
pub trait ToDuration: Sized {
    /// Create a new duration from this number in units of years.
    fn years(self) -> Duration;

    /// Create a new duration from this number in units of months.
    fn months(self) -> Duration;

    /// Create a new duration from this number in units of fortnights.
    fn fortnights(self) -> Duration;

    /// Create a new duration from this number in units of weeks.
    fn weeks(self) -> Duration;

    /// Create a new duration from this number in units of days.
    fn days(self) -> Duration;

    /// Create a new duration from this number in units of hours.
    fn hours(self) -> Duration;

    /// Create a new duration from this number in units of minutes.
    fn minutes(self) -> Duration;

    /// Create a new duration from this number in units of seconds.
    fn seconds(self) -> Duration;

    /// Equivalent to `years()`, but reads better for singular units.
    #[inline]
    fn year(self) -> Duration {
        self.years()
    }

    /// Equivalent to `months()`, but reads better for singular units.
    #[inline]
    fn month(self) -> Duration {
        self.months()
    }

    /// Equivalent to `fortnights()`, but reads better for singular units.
    #[inline]
    fn fortnight(self) -> Duration {
        self.fortnights()
    }

    /// Equivalent to `weeks()`, but reads better for singular units.
    #[inline]
    fn week(self) -> Duration {
        self.weeks()
    }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Duration {
        self.days()
    }

    /// Equivalent to `hours()`, but reads better for singular units.
    #[inline]
    fn hour(self) -> Duration {
        self.hours()
    }

    /// Equivalent to `minutes()`, but reads better for singular units.
    #[inline]
    fn minute(self) -> Duration {
        self.minutes()
    }

    /// Equivalent to `seconds()`, but reads better for singular units.
    #[inline]
    fn second(self) -> Duration {
        self.seconds()
    }
}

macro_rules! impl_to_duration {
    ($ty:ty) => {
        impl ToDuration for $ty {
            #[inline]
            fn years(self) -> Duration {
                Duration::of(self as f64, Unit::Year)
            }
            #[inline]
            fn months(self) -> Duration {
                Duration::of(self as f64, Unit::Month)
            }
            #[inline]
            fn fortnights(self) -> Duration {
                Duration::of(self as f64, Unit::Fortnight)
            }
            #[inline]
            fn weeks(self) -> Duration {
                Duration::of(self as f64, Unit::Week)
            }
            #[inline]
            fn days(self) -> Duration {
                Duration::of(self as f64, Unit::Day)
            }
            #[inline]
            fn hours(self) -> Duration {
                Duration::of(self as f64, Unit::Hour)
            }
            #[inline]
            fn minutes(self) -> Duration {
                Duration::of(self as f64, Unit::Minute)
            }
            #[inline]
            fn seconds(self) -> Duration {
                Duration::of(self as f64, Unit::Second)
            }
        }
    };
}

impl_to_duration!(i8);
impl_to_duration!(i16);
impl_to_duration!(i32);
impl_to_duration!(i64);
impl_to_duration!(f32);
impl_to_duration!(f64);

#[cfg(test)]
impl quickcheck::Arbitrary for Part {
    fn arbitrary(g: &mut quickcheck::Gen) -> Part {
        // Small integral amounts keep every scalar exactly representable,
        // which is what lets the properties below use `==`.
        let amount = i16::arbitrary(g);
        Part::new(Unit::arbitrary(g), f64::from(amount))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let amount = self.amount as i16;
        alloc::boxed::Box::new(
            (self.unit, amount)
                .shrink()
                .map(|(unit, amount)| Part::new(unit, f64::from(amount))),
        )
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        let len = usize::arbitrary(g) % 6;
        (0..len).map(|_| Part::arbitrary(g)).collect()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            self.parts
                .clone()
                .shrink()
                .map(|parts| parts.into_iter().collect()),
        )
    }
}
