use alloc::sync::Arc;

pub(crate) mod advance;
pub(crate) mod duration;

/// Creates a new ad hoc error via `format_args!`.
macro_rules! err {
    ($($tt:tt)*) => {{
        crate::error::Error::adhoc_from_args(format_args!($($tt)*))
    }}
}

pub(crate) use err;

/// An error that can occur in this crate.
///
/// Most operations on a [`Duration`](crate::Duration) are total. The
/// exceptions are:
///
/// * Dividing a duration by zero.
/// * Applying a duration to a calendar point when the result would fall
/// outside the range of dates supported by [`jiff`], or when an amount can't
/// be represented as a calendar step or exact offset (for example, when it
/// isn't finite).
/// * A calendar field being rejected by `jiff` during a clamped assignment.
/// This shouldn't happen in practice, but it is reported instead of being
/// silently wrapped.
///
/// Errors from `jiff` itself are preserved as the cause of an error from this
/// crate and are included in its `Display` output.
///
/// # Introspection is limited
///
/// Other than `Display`, `Debug` and (when the `std` feature is enabled) the
/// `std::error::Error` trait, this type exposes a few `Error::is_*`
/// predicates. They aren't exhaustive.
#[derive(Clone)]
pub struct Error {
    /// In an `Arc` so that errors are cheap to clone and one word in size.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error was caused by dividing a duration by
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_units::ToDuration;
    ///
    /// let err = 1.hour().checked_div(0).unwrap_err();
    /// assert!(err.is_division_by_zero());
    /// ```
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Duration(self::duration::Error::DivisionByZero { .. })
        )
    }

    /// Returns true when a calendar field was rejected while assigning a
    /// clamped year, month and day to a calendar point.
    pub fn is_invalid_calendar_field(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                *err.kind(),
                ErrorKind::Advance(
                    self::advance::Error::InvalidCalendarField { .. }
                )
            )
        })
    }

    /// Returns true when this error originated from a value being out of the
    /// supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_units::ToDuration;
    ///
    /// let err = 20_000.years().since(date(2024, 1, 1)).unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                *err.kind(),
                ErrorKind::Range(_)
                    | ErrorKind::Advance(
                        self::advance::Error::AmountOutOfRange { .. }
                    )
            )
        })
    }
}

impl Error {
    /// Creates a new error from `core::fmt::Arguments`.
    #[inline(never)]
    #[cold]
    pub(crate) fn adhoc_from_args<'a>(
        message: core::fmt::Arguments<'a>,
    ) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The `what` label names the value in the
    /// error message (e.g., "year").
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        match Arc::get_mut(&mut err.inner) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            // The consequent is shared or already has a cause. An error chain
            // is a linked list, so wrap it instead of dropping anything.
            _ => Error {
                inner: Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::from_display(&err)),
                    cause: Some(self),
                }),
            },
        }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values, starting with the highest level
    /// context and ending with the root cause. Never empty.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of an [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Advance(self::advance::Error),
    Duration(self::duration::Error),
    Jiff(jiff::Error),
    Range(RangeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref err) => err.fmt(f),
            Advance(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Jiff(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        ErrorKind::Jiff(err).into()
    }
}

/// A generic error message.
struct AdhocError {
    message: alloc::boxed::Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        AdhocError::from_display(message)
    }

    fn from_display<'a>(message: impl core::fmt::Display + 'a) -> AdhocError {
        use alloc::string::ToString;

        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists so that `ErrorContext` works with this crate's structured
/// error enums and with `jiff::Error` without public `From` impls for the
/// former.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for jiff::Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        Error::from(self)
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// without calling `map_err` everywhere.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure so
    /// that the happy path doesn't pay for it.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}
