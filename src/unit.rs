/// A unit of time that can appear in a [`Duration`](crate::Duration).
///
/// Every unit has a fixed *nominal* length in seconds (see
/// [`Unit::nominal_seconds`]). The nominal length is what a duration's
/// scalar is made of, and so it determines equality, ordering and the result
/// of converting a duration to a plain number. It is *never* used when a
/// duration is applied to a calendar point: a month applied to a date steps
/// the month field, regardless of whether the month has 28 or 31 days.
///
/// # Example: ordering
///
/// Bigger units compare greater than smaller units.
///
/// ```
/// use jiff_units::Unit;
///
/// assert!(Unit::Year > Unit::Month);
/// assert!(Unit::Fortnight > Unit::Week);
/// assert!(Unit::Minute > Unit::Second);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Unit {
    /// Always 1 second.
    Second = 0,
    /// Always 60 seconds.
    Minute = 1,
    /// Always 3,600 seconds.
    Hour = 2,
    /// Nominally 86,400 seconds. Applied to a date, it steps one calendar
    /// day.
    Day = 3,
    /// Nominally 7 days.
    Week = 4,
    /// Nominally 14 days.
    Fortnight = 5,
    /// Nominally 30 days. Applied to a calendar point, it steps the month
    /// field and clamps the day.
    Month = 6,
    /// Nominally 365.25 days. Applied to a calendar point, it steps the year
    /// field and clamps the day.
    Year = 7,
}

impl Unit {
    /// All units, from biggest to smallest.
    pub const ALL: [Unit; 8] = [
        Unit::Year,
        Unit::Month,
        Unit::Fortnight,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Returns the nominal number of seconds in one of this unit.
    ///
    /// | unit | nominal seconds |
    /// |---|---|
    /// | second | 1 |
    /// | minute | 60 |
    /// | hour | 3,600 |
    /// | day | 86,400 |
    /// | week | 604,800 |
    /// | fortnight | 1,209,600 |
    /// | month | 2,592,000 (30 days) |
    /// | year | 31,557,600 (365.25 days) |
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::Unit;
    ///
    /// assert_eq!(Unit::Month.nominal_seconds(), 30 * 86_400);
    /// assert_eq!(Unit::Year.nominal_seconds(), 31_557_600);
    /// ```
    #[inline]
    pub const fn nominal_seconds(self) -> i64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => SECS_PER_MINUTE,
            Unit::Hour => SECS_PER_HOUR,
            Unit::Day => SECS_PER_DAY,
            Unit::Week => 7 * SECS_PER_DAY,
            Unit::Fortnight => 14 * SECS_PER_DAY,
            Unit::Month => 30 * SECS_PER_DAY,
            // 365.25 days
            Unit::Year => 365 * SECS_PER_DAY + SECS_PER_DAY / 4,
        }
    }

    /// Returns true for units that are stepped through calendar fields
    /// (years and months) rather than added as elapsed time.
    ///
    /// Days, weeks and fortnights are also calendar stepped, but only when
    /// applied to a date without a time of day. So they return `false` here.
    #[inline]
    pub const fn is_calendar(self) -> bool {
        matches!(self, Unit::Year | Unit::Month)
    }

    /// Returns the number of calendar days in one of this unit, for the
    /// units that are whole days.
    #[inline]
    pub(crate) const fn days(self) -> Option<i64> {
        match self {
            Unit::Day => Some(1),
            Unit::Week => Some(7),
            Unit::Fortnight => Some(14),
            _ => None,
        }
    }

    /// Returns the singular lowercase name of this unit, e.g., `month`.
    pub const fn singular(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Fortnight => "fortnight",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Returns the plural lowercase name of this unit, e.g., `months`.
    pub const fn plural(self) -> &'static str {
        match self {
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Fortnight => "fortnights",
            Unit::Month => "months",
            Unit::Year => "years",
        }
    }

    /// Used to index per-unit tables.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.singular())
    }
}

pub(crate) const SECS_PER_MINUTE: i64 = 60;
pub(crate) const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
pub(crate) const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&Unit::ALL).unwrap()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        // Shrink toward seconds, the simplest unit.
        let index = self.index();
        alloc::boxed::Box::new(
            Unit::ALL.into_iter().filter(move |u| u.index() < index),
        )
    }
}
