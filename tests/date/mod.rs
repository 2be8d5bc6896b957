use jiff::{
    civil::{date, Date},
    Span,
};
use jiff_units::{CalendarPoint, ToDuration};

fn dates() -> Vec<Date> {
    let mut dates = vec![
        date(2005, 2, 10),
        date(2004, 1, 31),
        date(2005, 1, 31),
        date(2004, 2, 29),
        date(2023, 12, 31),
    ];
    #[cfg(feature = "std")]
    dates.push(jiff::Zoned::now().date());
    dates
}

fn today_plus(today: Date, d: jiff_units::Duration) -> CalendarPoint {
    CalendarPoint::from(today) + d
}

#[test]
fn date_plus_duration() {
    for today in dates() {
        let plus = |span: Span| {
            CalendarPoint::from(today.checked_add(span).unwrap())
        };
        assert_eq!(plus(Span::new().days(1)), today_plus(today, 1.day()));
        assert_eq!(plus(Span::new().months(1)), today_plus(today, 1.month()));

        let midnight = CalendarPoint::from(today.at(0, 0, 0, 0));
        assert_eq!(midnight.clone() + 1, today_plus(today, 1.second()));
        assert_eq!(midnight.clone() + 60, today_plus(today, 1.minute()));
        assert_eq!(midnight.clone() + 60 * 60, today_plus(today, 1.hour()));
    }
}

#[test]
fn chaining_duration_operations() {
    for today in dates() {
        let want = today
            .checked_add(Span::new().days(2))
            .and_then(|d| d.checked_add(Span::new().months(-3)))
            .unwrap();
        assert_eq!(
            CalendarPoint::from(want),
            CalendarPoint::from(today) + 2.days() - 3.months(),
        );

        let want = today
            .checked_add(Span::new().days(1))
            .and_then(|d| d.checked_add(Span::new().months(2)))
            .unwrap();
        assert_eq!(
            CalendarPoint::from(want),
            CalendarPoint::from(today) + 1.day() + 2.months(),
        );
    }
}

#[test]
fn add_one_year_to_leap_day() {
    assert_eq!(
        CalendarPoint::from(date(2004, 2, 29)) + 1.year(),
        CalendarPoint::from(date(2005, 2, 28)),
    );
}

#[test]
fn dates_stay_dates() -> crate::Result {
    let d = date(2005, 2, 28);
    let got = (1.year() + 2.months() + 3.weeks() + 4.days()).since(d)?;
    assert_eq!(got.to_date(), Some(date(2006, 5, 23)));
    assert!(!got.has_time());

    let got = (1.day() + 12.hours()).until(d)?;
    assert_eq!(got.to_date(), None);
    assert_eq!(got.to_datetime(), date(2005, 2, 26).at(12, 0, 0, 0));
    Ok(())
}
