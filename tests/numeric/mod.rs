use jiff::{
    civil::date,
    tz::{self, TimeZone},
    Span,
};
use jiff_units::{CalendarPoint, Duration, OffsetSeconds, ToDuration};

/// 2005-02-10T15:30:45 at a fixed offset of -05:00.
fn now() -> CalendarPoint {
    let tz = TimeZone::fixed(tz::offset(-5));
    let zdt = date(2005, 2, 10).at(15, 30, 45, 0).to_zoned(tz).unwrap();
    CalendarPoint::Zoned(zdt)
}

/// 2005-02-10T15:30:45 without a time zone.
fn dtnow() -> CalendarPoint {
    CalendarPoint::DateTime(date(2005, 2, 10).at(15, 30, 45, 0))
}

fn points() -> [CalendarPoint; 2] {
    [now(), dtnow()]
}

/// Applies a span with `jiff`'s own arithmetic, as a point of comparison.
fn advance(point: &CalendarPoint, span: Span) -> CalendarPoint {
    match *point {
        CalendarPoint::Date(d) => d.checked_add(span).unwrap().into(),
        CalendarPoint::DateTime(dt) => dt.checked_add(span).unwrap().into(),
        CalendarPoint::Zoned(ref zdt) => {
            zdt.checked_add(span).unwrap().into()
        }
    }
}

fn composed() -> Vec<(Duration, i64)> {
    vec![
        (1.minute(), 60),
        (10.minutes(), 600),
        (1.hour() + 15.minutes(), 4500),
        (2.days() + 4.hours() + 30.minutes(), 189000),
        (5.years() + 1.month() + 1.fortnight(), 161589600),
    ]
}

#[test]
fn units() {
    for (actual, expected) in composed() {
        assert_eq!(expected, actual);
        assert_eq!(actual, expected);
        assert_eq!(actual.to_integer(), expected);
    }
}

#[test]
fn intervals() -> crate::Result {
    let _ = crate::Logger::init();
    for (_, seconds) in composed() {
        for p in points() {
            assert_eq!(seconds.since(p.clone())?, p.clone() + seconds);
            assert_eq!(seconds.until(p.clone())?, p.clone() - seconds);
            let d = seconds.seconds();
            assert_eq!(d.since(p.clone())?, seconds.since(p.clone())?);
        }
    }
    Ok(())
}

#[test]
fn irregular_durations() -> crate::Result {
    for p in points() {
        assert_eq!(
            advance(&p, Span::new().days(3000)),
            3000.days().since(p.clone())?,
        );
        assert_eq!(
            advance(&p, Span::new().months(1)),
            1.month().since(p.clone())?,
        );
        assert_eq!(
            advance(&p, Span::new().months(-1)),
            1.month().until(p.clone())?,
        );
        assert_eq!(
            advance(&p, Span::new().years(20)),
            20.years().since(p.clone())?,
        );
    }
    Ok(())
}

#[test]
fn duration_addition() -> crate::Result {
    for p in points() {
        let stepped = advance(&p, Span::new().days(1));
        assert_eq!(
            advance(&stepped, Span::new().months(1)),
            (1.day() + 1.month()).since(p.clone())?,
        );
        assert_eq!(
            advance(&p, Span::new().days(7)),
            (1.week() + 5.seconds() - 5.seconds()).since(p.clone())?,
        );
        assert_eq!(
            advance(&p, Span::new().years(2)),
            (4.years() - 2.years()).since(p.clone())?,
        );
    }
    Ok(())
}

#[test]
fn time_plus_duration() -> crate::Result {
    for p in points() {
        assert_eq!(p.clone() + 8, p.clone() + 8.seconds());
        assert_eq!(p.clone() + 22.9, p.clone() + 22.9.seconds());
        assert_eq!(p.checked_add_seconds(8.0)?, p.clone() + 8.seconds());
        assert_eq!(p.checked_add_seconds(22.9)?, p.clone() + 22.9.seconds());
        assert_eq!(advance(&p, Span::new().days(15)), p.clone() + 15.days());
        assert_eq!(
            advance(&p, Span::new().months(1)),
            p.clone() + 1.month(),
        );
    }
    Ok(())
}

#[test]
fn chaining_duration_operations() {
    for p in points() {
        let stepped = advance(&p, Span::new().days(2));
        assert_eq!(
            advance(&stepped, Span::new().months(-3)),
            p.clone() + 2.days() - 3.months(),
        );
        let stepped = advance(&p, Span::new().days(1));
        assert_eq!(
            advance(&stepped, Span::new().months(2)),
            p.clone() + 1.day() + 2.months(),
        );
    }
}

#[test]
fn duration_after_conversion_is_no_longer_accurate() {
    for p in points() {
        assert_eq!(
            p.clone() + 30.days().to_integer(),
            p.clone() + 1.month().to_integer(),
        );
        assert_eq!(
            p.clone() + 365.25.days().to_float(),
            p.clone() + 1.year().to_float(),
        );
        // As a number, a month is 30 days. As a duration, it's a calendar
        // month, and February 2005 has 28 days.
        assert_ne!(
            p.clone() + 1.month().to_integer(),
            p.clone() + 1.month(),
        );
    }
}

#[test]
fn add_one_year_to_leap_day() {
    let zdt =
        date(2004, 2, 29).at(15, 15, 10, 0).to_zoned(TimeZone::UTC).unwrap();
    let got = (CalendarPoint::from(zdt) + 1.year()).into_zoned().unwrap();
    assert_eq!(got.datetime(), date(2005, 2, 28).at(15, 15, 10, 0));
    assert_eq!(got.offset(), tz::Offset::UTC);

    let dt = CalendarPoint::from(date(2004, 2, 29).at(15, 15, 10, 0));
    assert_eq!(
        dt + 1.year(),
        CalendarPoint::DateTime(date(2005, 2, 28).at(15, 15, 10, 0)),
    );
}

#[test]
fn applying_preserves_zone() -> crate::Result {
    let tz = TimeZone::get("Europe/Moscow")?;
    let zdt = date(2005, 2, 10).at(15, 30, 45, 0).to_zoned(tz)?;
    let got = (1.month() + 3.hours()).since(&zdt)?.into_zoned().unwrap();
    assert_eq!(got.time_zone().iana_name(), Some("Europe/Moscow"));
    assert_eq!(got.datetime(), date(2005, 3, 10).at(18, 30, 45, 0));
    Ok(())
}

#[test]
fn errors_are_reported() {
    let err = 1.year().since(date(9999, 12, 31)).unwrap_err();
    assert!(err.is_range());
    assert!(err.to_string().contains("10000"), "{err}");

    let err = (1.day() / 1.0).checked_div(0).unwrap_err();
    assert!(err.is_division_by_zero());
}

#[test]
#[should_panic(expected = "adding duration to calendar point overflowed")]
fn operator_panics_on_overflow() {
    let _ = CalendarPoint::from(date(9999, 12, 31)) + 1.day();
}
