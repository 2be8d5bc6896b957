/*!
Applies the parts of a duration to a calendar point.

Parts are folded left to right in composition order, one calendar step or
exact offset per part. Parts with the same unit are never merged first. A
month step clamps the day of the month, so `1.month() + 1.month()` applied to
January 31 lands on March 29 in a leap year, and not on March 31.

The rules for each unit:

* Years step the year field. The month is unchanged and the day is clamped
to the last day of the target month.
* Months step the month field, carrying into the year with floored
division. The day is clamped.
* Days, weeks and fortnights on a date-only point step whole calendar days.
On a point with a time of day, they are exact offsets of 86,400 seconds per
day.
* Hours, minutes and seconds are exact offsets. A date-only point is first
promoted to a datetime at midnight.

Fractional calendar amounts are split. The whole part is stepped and the
fraction carries into the next smaller unit: a year fraction becomes months
(times 12), a month fraction becomes days (times 30, the nominal length of a
month) and a day fraction on a date-only point becomes an exact offset after
promotion.
*/

use jiff::{civil::Date, SignedDuration, Span};

use crate::{
    duration::Part,
    error::{advance::Error as E, err, Error, ErrorContext},
    point::CalendarPoint,
    unit::{Unit, SECS_PER_DAY},
};

#[cfg(not(feature = "std"))]
use crate::util::libm::Float;

/// The smallest year `jiff` supports.
const MIN_YEAR: i64 = -9999;
/// The biggest year `jiff` supports.
const MAX_YEAR: i64 = 9999;

/// Applies every part, in order, to the given point.
pub(crate) fn advance(
    point: CalendarPoint,
    parts: impl IntoIterator<Item = Part>,
) -> Result<CalendarPoint, Error> {
    let mut point = point;
    for part in parts {
        let next = step(&point, part).with_context(|| {
            err!(
                "failed to apply {unit} part with amount {amount} to {point}",
                amount = part.amount(),
                unit = part.unit().singular(),
            )
        })?;
        trace!(
            "applied {amount} {unit}: {point} -> {next}",
            amount = part.amount(),
            unit = part.unit().plural(),
        );
        point = next;
    }
    Ok(point)
}

/// Converts a number of seconds to an exact offset.
pub(crate) fn exact_offset(seconds: f64) -> Result<SignedDuration, Error> {
    if !seconds.is_finite() {
        let (unit, amount) = (Unit::Second, seconds);
        return Err(Error::from(E::AmountOutOfRange { unit, amount }));
    }
    SignedDuration::try_from_secs_f64(seconds)
        .context(E::ExactOffset { seconds })
}

fn step(point: &CalendarPoint, part: Part) -> Result<CalendarPoint, Error> {
    let (unit, amount) = (part.unit(), part.amount());
    if !amount.is_finite() {
        return Err(Error::from(E::AmountOutOfRange { unit, amount }));
    }
    match unit {
        Unit::Year => {
            let (whole, fract) = split(unit, amount)?;
            let point = step_years(point, whole)?;
            carry(point, Part::new(Unit::Month, fract * 12.0))
        }
        Unit::Month => {
            let (whole, fract) = split(unit, amount)?;
            let point = step_months(point, whole)?;
            carry(point, Part::new(Unit::Day, fract * 30.0))
        }
        Unit::Day | Unit::Week | Unit::Fortnight => {
            // Only `Day`, `Week` and `Fortnight` have a day count.
            let per = unit.days().unwrap_or(1) as f64;
            let days = amount * per;
            match *point {
                CalendarPoint::Date(date) => {
                    let (whole, fract) = split(unit, days)?;
                    let point = CalendarPoint::Date(step_days(date, whole)?);
                    let offset = exact_offset(fract * SECS_PER_DAY as f64)?;
                    if offset.is_zero() {
                        return Ok(point);
                    }
                    point.promote().add_exact(offset)
                }
                _ => point.add_exact(exact_offset(
                    days * SECS_PER_DAY as f64,
                )?),
            }
        }
        Unit::Hour | Unit::Minute | Unit::Second => {
            let offset =
                exact_offset(amount * unit.nominal_seconds() as f64)?;
            point.clone().promote().add_exact(offset)
        }
    }
}

/// Applies the fractional carry from a bigger unit, if there is one.
///
/// The carried amount is rounded to nine decimal places, which drops the
/// noise left behind by splitting, e.g., `1.1` into `1` and
/// `0.10000000000000009`.
fn carry(point: CalendarPoint, part: Part) -> Result<CalendarPoint, Error> {
    let part = Part::new(part.unit(), (part.amount() * 1e9).round() / 1e9);
    if part.amount() == 0.0 {
        return Ok(point);
    }
    trace!(
        "carrying fractional remainder as {amount} {unit}",
        amount = part.amount(),
        unit = part.unit().plural(),
    );
    step(&point, part)
}

/// Splits an amount into a whole number of steps and the remaining
/// fraction, which has the same sign as the amount.
fn split(unit: Unit, amount: f64) -> Result<(i64, f64), Error> {
    // 2^63. Every `f64` in `-2^63..2^63` truncates to a valid `i64`.
    const LIMIT: f64 = 9223372036854775808.0;

    let whole = amount.trunc();
    if !(-LIMIT <= whole && whole < LIMIT) {
        return Err(Error::from(E::AmountOutOfRange { unit, amount }));
    }
    Ok((whole as i64, amount.fract()))
}

fn step_years(
    point: &CalendarPoint,
    years: i64,
) -> Result<CalendarPoint, Error> {
    if years == 0 {
        return Ok(point.clone());
    }
    let date = point.date();
    let year = i64::from(date.year())
        .checked_add(years)
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or_else(|| {
            Error::range(
                "year",
                i128::from(date.year()) + i128::from(years),
                MIN_YEAR,
                MAX_YEAR,
            )
        })
        .context(E::StepYears { years })?;
    // OK because the range check above guarantees it fits.
    let year = year as i16;
    let clamped = clamp_date(year, date.month(), date.day())
        .context(E::StepYears { years })?;
    point.with_date(clamped).context(E::StepYears { years })
}

fn step_months(
    point: &CalendarPoint,
    months: i64,
) -> Result<CalendarPoint, Error> {
    if months == 0 {
        return Ok(point.clone());
    }
    let date = point.date();
    // i128 so that adding any `i64` number of months can't overflow.
    let total = i128::from(date.month() - 1) + i128::from(months);
    let year = i128::from(date.year()) + total.div_euclid(12);
    if !(i128::from(MIN_YEAR)..=i128::from(MAX_YEAR)).contains(&year) {
        return Err(Error::range("year", year, MIN_YEAR, MAX_YEAR))
            .context(E::StepMonths { months });
    }
    // OK because of the range check above and because `rem_euclid(12)` is
    // always in `0..12`.
    let (year, month) = (year as i16, total.rem_euclid(12) as i8 + 1);
    let clamped = clamp_date(year, month, date.day())
        .context(E::StepMonths { months })?;
    point.with_date(clamped).context(E::StepMonths { months })
}

fn step_days(date: Date, days: i64) -> Result<Date, Error> {
    if days == 0 {
        return Ok(date);
    }
    Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span))
        .context(E::StepDays { days })
}

/// Builds a date from the given fields, clamping the day to the last day of
/// the month.
fn clamp_date(year: i16, month: i8, day: i8) -> Result<Date, Error> {
    let first = Date::new(year, month, 1).context(E::InvalidCalendarField {
        year,
        month,
        day: 1,
    })?;
    let day = day.min(first.days_in_month());
    Date::new(year, month, day)
        .context(E::InvalidCalendarField { year, month, day })
}
