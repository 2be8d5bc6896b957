/*!
Resolves "now" for durations applied relative to the current moment.

[`Duration::from_now`](crate::Duration::from_now) and
[`Duration::ago`](crate::Duration::ago) take no calendar point. Instead, they
ask an [`AnchorConfig`] for one. How "now" is represented depends on whether
a time zone is configured:

* With no time zone, "now" is the current wall clock time in the system's
time zone, as a civil [`DateTime`](jiff::civil::DateTime). Durations applied
to it produce civil datetimes without any time zone identity.
* With a time zone, "now" is a [`Zoned`](jiff::Zoned) in that time zone.
Durations applied to it produce zoned datetimes in the same time zone.

The process-wide default time zone is unset initially. Applications set it
with [`set_default_time_zone`]. It's read once every time "now" is resolved,
so changes are visible on the next call.
*/

use std::sync::RwLock;

use jiff::{tz::TimeZone, Timestamp};

use crate::point::CalendarPoint;

static DEFAULT_TIME_ZONE: RwLock<Option<TimeZone>> = RwLock::new(None);

/// Sets the process-wide default time zone used by
/// [`Duration::from_now`](crate::Duration::from_now) and
/// [`Duration::ago`](crate::Duration::ago).
///
/// Passing `None` unsets it, so that "now" is resolved as a civil datetime
/// in the system's time zone again.
///
/// # Panics
///
/// When the lock guarding the default time zone is poisoned. This can only
/// happen if a thread panicked while holding it, which this crate never
/// does.
///
/// # Example
///
/// ```
/// use jiff::tz::TimeZone;
/// use jiff_units::{default_time_zone, set_default_time_zone};
///
/// set_default_time_zone(Some(TimeZone::get("Europe/Moscow")?));
/// assert_eq!(
///     default_time_zone().and_then(|tz| tz.iana_name().map(String::from)),
///     Some("Europe/Moscow".to_string()),
/// );
/// set_default_time_zone(None);
/// assert!(default_time_zone().is_none());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn set_default_time_zone(tz: Option<TimeZone>) {
    match tz {
        Some(ref tz) => {
            debug!(
                "setting default time zone to {}",
                tz.iana_name().unwrap_or("<unnamed>"),
            );
        }
        None => {
            debug!("unsetting default time zone");
        }
    }
    *DEFAULT_TIME_ZONE.write().unwrap() = tz;
}

/// Returns a copy of the process-wide default time zone, if one is set.
///
/// # Panics
///
/// When the lock guarding the default time zone is poisoned.
pub fn default_time_zone() -> Option<TimeZone> {
    DEFAULT_TIME_ZONE.read().unwrap().clone()
}

/// Configuration for resolving "now".
///
/// A configuration built with [`AnchorConfig::new`] has no time zone and
/// reads the system clock and the system time zone. Each of those can be
/// overridden, which is mostly useful for tests and for applications that
/// keep their own notion of the current time.
///
/// # Example
///
/// ```
/// use jiff::{civil::date, tz::TimeZone, Timestamp};
/// use jiff_units::{AnchorConfig, CalendarPoint, ToDuration};
///
/// let now: Timestamp = "2005-02-10T15:30:45Z".parse()?;
///
/// // Without a time zone, "now" is a civil datetime in the system time zone.
/// let config = AnchorConfig::new()
///     .now(now)
///     .system_time_zone(TimeZone::fixed(jiff::tz::offset(-5)));
/// assert_eq!(
///     1.day().from_now_with(&config)?,
///     CalendarPoint::DateTime(date(2005, 2, 11).at(10, 30, 45, 0)),
/// );
///
/// // With a time zone, "now" is a zoned datetime in that time zone.
/// let config = config.time_zone(TimeZone::get("Europe/Moscow")?);
/// let zdt = 1.day().from_now_with(&config)?.into_zoned().unwrap();
/// assert_eq!(zdt.datetime(), date(2005, 2, 11).at(18, 30, 45, 0));
/// assert_eq!(zdt.time_zone().iana_name(), Some("Europe/Moscow"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnchorConfig {
    time_zone: Option<TimeZone>,
    now: Option<Timestamp>,
    system_time_zone: Option<TimeZone>,
}

impl AnchorConfig {
    /// Creates a configuration with no time zone that reads the system clock
    /// and the system time zone.
    #[inline]
    pub fn new() -> AnchorConfig {
        AnchorConfig::default()
    }

    /// Returns a configuration with the current process-wide default time
    /// zone, as set by [`set_default_time_zone`].
    ///
    /// This is a snapshot. Changing the default time zone afterwards doesn't
    /// change the returned configuration.
    pub fn global() -> AnchorConfig {
        AnchorConfig { time_zone: default_time_zone(), ..AnchorConfig::new() }
    }

    /// Sets the time zone that "now" is resolved in.
    #[inline]
    pub fn time_zone(self, tz: TimeZone) -> AnchorConfig {
        AnchorConfig { time_zone: Some(tz), ..self }
    }

    /// Pins "now" to the given instant instead of reading the system clock.
    #[inline]
    pub fn now(self, timestamp: Timestamp) -> AnchorConfig {
        AnchorConfig { now: Some(timestamp), ..self }
    }

    /// Uses the given time zone in place of the system time zone when no
    /// time zone is set.
    #[inline]
    pub fn system_time_zone(self, tz: TimeZone) -> AnchorConfig {
        AnchorConfig { system_time_zone: Some(tz), ..self }
    }

    /// Returns the time zone that "now" is resolved in, if one is set.
    #[inline]
    pub fn get_time_zone(&self) -> Option<&TimeZone> {
        self.time_zone.as_ref()
    }

    /// Resolves the current moment according to this configuration.
    ///
    /// The clock is read exactly once.
    pub fn resolve_now(&self) -> CalendarPoint {
        let now = self.now.unwrap_or_else(Timestamp::now);
        match self.time_zone {
            Some(ref tz) => {
                trace!(
                    "resolved now {now} in time zone {}",
                    tz.iana_name().unwrap_or("<unnamed>"),
                );
                CalendarPoint::Zoned(now.to_zoned(tz.clone()))
            }
            None => {
                let dt = match self.system_time_zone {
                    Some(ref tz) => tz.to_datetime(now),
                    None => TimeZone::system().to_datetime(now),
                };
                trace!("resolved now {now} as civil datetime {dt}");
                CalendarPoint::DateTime(dt)
            }
        }
    }
}
