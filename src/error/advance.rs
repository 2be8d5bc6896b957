use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    AmountOutOfRange { unit: Unit, amount: f64 },
    ExactOffset { seconds: f64 },
    InvalidCalendarField { year: i16, month: i8, day: i8 },
    StepDays { days: i64 },
    StepMonths { months: i64 },
    StepYears { years: i64 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Advance(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            AmountOutOfRange { unit, amount } => write!(
                f,
                "amount {amount} for unit '{unit}' cannot be applied \
                 to a calendar point (it must be finite and fit in \
                 a 64-bit integer)",
                unit = unit.singular(),
            ),
            ExactOffset { seconds } => write!(
                f,
                "failed to add exact offset of {seconds} seconds",
            ),
            InvalidCalendarField { year, month, day } => write!(
                f,
                "calendar rejected clamped date fields \
                 year={year}, month={month}, day={day}",
            ),
            StepDays { days } => {
                write!(f, "failed to step {days} calendar days")
            }
            StepMonths { months } => {
                write!(f, "failed to step {months} calendar months")
            }
            StepYears { years } => {
                write!(f, "failed to step {years} calendar years")
            }
        }
    }
}
