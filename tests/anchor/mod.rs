use std::sync::{Mutex, MutexGuard};

use jiff::{civil::date, tz::TimeZone, Timestamp, Zoned};
use jiff_units::{
    default_time_zone, set_default_time_zone, AnchorConfig, CalendarPoint,
    OffsetSeconds, ToDuration,
};

/// Serializes tests that read or write the process-wide default time zone.
static GLOBAL: Mutex<()> = Mutex::new(());

/// Locks the process-wide time zone and resets it to the given value. The
/// lock is held until the returned guard is dropped.
fn with_default_time_zone(tz: Option<TimeZone>) -> MutexGuard<'static, ()> {
    let _ = crate::Logger::init();
    let guard = GLOBAL.lock().unwrap_or_else(|err| err.into_inner());
    set_default_time_zone(tz);
    guard
}

fn y2k_in_new_york() -> anyhow::Result<Timestamp> {
    let tz = TimeZone::get("America/New_York")?;
    Ok(date(2000, 1, 1).at(0, 0, 0, 0).to_zoned(tz)?.timestamp())
}

#[test]
fn now_with_real_clock() -> anyhow::Result<()> {
    let _guard = with_default_time_zone(None);
    for seconds in [60, 600, 4500, 189000, 161589600] {
        let before = CalendarPoint::from(Zoned::now().datetime());
        let got = seconds.seconds().ago()?;
        assert!(got.time_zone().is_none());
        assert!(got >= before.clone() - seconds);

        let got = seconds.seconds().from_now()?;
        assert!(got >= before.clone() + seconds);

        let got = seconds.ago()?;
        assert!(got.time_zone().is_none());
        assert!(got >= before.clone() - seconds);

        let got = seconds.from_now()?;
        assert!(got >= before + seconds);
    }
    Ok(())
}

#[test]
fn anchored_to_system_now_when_time_zone_is_not_set() -> anyhow::Result<()> {
    let _guard = with_default_time_zone(None);
    let config = AnchorConfig::global()
        .now(y2k_in_new_york()?)
        .system_time_zone(TimeZone::get("America/New_York")?);

    let since = 5.from_now_with(&config)?;
    assert!(since.as_zoned().is_none());
    assert_eq!(
        since,
        CalendarPoint::DateTime(date(2000, 1, 1).at(0, 0, 5, 0))
    );

    let ago = 5.ago_with(&config)?;
    assert!(ago.as_zoned().is_none());
    assert_eq!(
        ago,
        CalendarPoint::DateTime(date(1999, 12, 31).at(23, 59, 55, 0))
    );

    assert_eq!(5.seconds().from_now_with(&config)?, since);
    assert_eq!(5.seconds().ago_with(&config)?, ago);
    Ok(())
}

#[test]
fn anchored_to_zone_now_when_time_zone_is_set() -> anyhow::Result<()> {
    let eastern = TimeZone::get("America/New_York")?;
    let _guard = with_default_time_zone(Some(eastern));
    let config = AnchorConfig::global().now(y2k_in_new_york()?);
    set_default_time_zone(None);

    let since = 5.from_now_with(&config)?.into_zoned().unwrap();
    assert_eq!(since.timestamp().to_string(), "2000-01-01T05:00:05Z");
    assert_eq!(since.datetime(), date(2000, 1, 1).at(0, 0, 5, 0));
    assert_eq!(since.time_zone().iana_name(), Some("America/New_York"));

    let ago = 5.ago_with(&config)?.into_zoned().unwrap();
    assert_eq!(ago.timestamp().to_string(), "2000-01-01T04:59:55Z");
    assert_eq!(ago.datetime(), date(1999, 12, 31).at(23, 59, 55, 0));
    assert_eq!(ago.time_zone().iana_name(), Some("America/New_York"));

    let since = 5.seconds().from_now_with(&config)?.into_zoned().unwrap();
    assert_eq!(since.timestamp().to_string(), "2000-01-01T05:00:05Z");
    assert_eq!(since.time_zone().iana_name(), Some("America/New_York"));
    Ok(())
}

#[test]
fn default_time_zone_is_read_on_every_call() -> anyhow::Result<()> {
    let _guard = with_default_time_zone(None);
    assert!(1.hour().ago()?.as_zoned().is_none());

    set_default_time_zone(Some(TimeZone::get("Asia/Tokyo")?));
    let got = 1.hour().ago()?;
    let zdt = got.as_zoned().unwrap();
    assert_eq!(zdt.time_zone().iana_name(), Some("Asia/Tokyo"));
    assert_eq!(
        default_time_zone().and_then(|tz| tz.iana_name().map(String::from)),
        Some("Asia/Tokyo".to_string()),
    );

    set_default_time_zone(None);
    assert!(1.hour().from_now()?.as_zoned().is_none());
    Ok(())
}
