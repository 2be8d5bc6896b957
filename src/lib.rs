/*!
Calendar-aware durations built from unit suffixes on numbers, on top of
[`jiff`].

A [`Duration`] is two things at once. It's a scalar number of *nominal*
seconds, where a month is always 30 days and a year is always 365.25 days.
And it's the list of `(unit, amount)` parts it was built from, in the order
they were composed. The scalar is what durations are compared by, including
against plain numbers. The parts are what's used when a duration is applied
to a point in calendar time: a month steps the month field and clamps the
day, no matter how many days that month has.

# Example

```
use jiff::civil::date;
use jiff_units::ToDuration;

// Durations compare by their nominal scalar.
assert_eq!(1.hour() + 15.minutes(), 4_500);
assert_eq!(5.years() + 1.month() + 1.fortnight(), 161_589_600);

// But they're applied to dates part by part, with calendar stepping.
let jan31 = date(2005, 1, 31);
assert_eq!(1.month().since(jan31)?.date(), date(2005, 2, 28));
assert_eq!((1.month() + 1.day()).since(jan31)?.date(), date(2005, 3, 1));

// A year from a leap day lands on February 28.
let leap = date(2004, 2, 29).at(15, 15, 10, 0);
assert_eq!(
    1.year().since(leap)?.to_datetime(),
    date(2005, 2, 28).at(15, 15, 10, 0),
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

Once a duration is converted to a plain number with
[`Duration::to_integer`] or [`Duration::to_float`], the parts are gone. A
month is then just 2,592,000 seconds.

# Anchoring to "now"

With the `std` feature enabled, [`Duration::from_now`] and [`Duration::ago`]
apply a duration to the current moment. By default, that's the current civil
datetime in the system time zone. After [`set_default_time_zone`] is called
with a time zone, it's the current zoned datetime in that time zone instead.
[`AnchorConfig`] makes all of this explicit and pinnable for tests.

Plain numbers can be applied too, as exact offsets in seconds, with
[`OffsetSeconds`]: `5.ago()` is five seconds before now.

# Crate features

* **std** (enabled by default) - Enables reading the system clock, the
process-wide default time zone and `std::error::Error` impls. This also
enables `jiff`'s system time zone and time zone database support.
* **logging** - Emits trace-level log records via the [`log`] crate as parts
are applied and "now" is resolved.
* **serde** - Adds `Serialize` and `Deserialize` impls for [`Unit`],
[`Part`], [`Duration`] and [`ByteUnit`].

[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

#[cfg(feature = "std")]
pub use crate::anchor::{
    default_time_zone, set_default_time_zone, AnchorConfig,
};
pub use crate::{
    bytes::{ByteUnit, ToBytes},
    duration::{Duration, Part, ToDuration},
    error::Error,
    offset::OffsetSeconds,
    point::CalendarPoint,
    unit::Unit,
};

#[macro_use]
mod logging;

mod advance;
#[cfg(feature = "std")]
mod anchor;
mod bytes;
mod duration;
mod error;
mod offset;
mod point;
mod unit;
mod util;
